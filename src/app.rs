//! src/app.rs
//!
//! Live spark-chart monitor.
//!
//! Builds two spark charts, polls a sample source once per frame, feeds the
//! charts and redraws the panel tree.
//!
//! # Keyboard Controls
//!
//! - **Tab** — Cycle focus between the charts. The focused chart's border and
//!   Info panel are highlighted.
//! - **a** — Toggle autoscale for the focused chart.
//! - **p** — Toggle peak highlighting.
//! - **v** — Cycle the value-axis width: `0, 6, 8, 10`.
//! - **t** — Cycle the fixed top value: `unset, 50, 100, 200`. Only used while
//!   autoscale is off.
//! - **c** — Clear the focused chart.
//! - **r** — Replace the focused chart's samples with a fresh random burst.
//! - **q** — Quit and restore terminal state.
//!
//! # Sources
//!
//! - `--source random` (default): two random walks with occasional spikes.
//! - `--source serial --port /dev/ttyACM0`: receiver telemetry lines such as
//!   `Received: MSG 9 RSSI -94.5` and `RSSI_PACKET: -93.5 dBm`.
//!
//! # Logging
//!
//! Nothing is logged unless `--log-file` is given, because the terminal is
//! owned by the UI. Use `RUST_LOG=sparkchart_monitor=trace` to see window
//! trimming.

use std::cell::RefCell;
use std::fs::File;
use std::rc::Rc;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Direction};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::chart::{SharedChart, SparkChart};
use crate::config::AppConfig;
use crate::panels::{ChartPanel, InfoPanel, ParagraphPanel};
use crate::source::{RandomWalk, SampleSource, open_source};
use crate::ui::{DefaultTheme, Node};

const AXIS_WIDTH_PRESETS: [i32; 4] = [0, 6, 8, 10];
const TOP_PRESETS: [f64; 4] = [0.0, 50.0, 100.0, 200.0];
const KEY_HELP: [(&str, &str); 8] = [
    ("TAB", "Focus"),
    ("A", "Autoscale"),
    ("P", "Peaks"),
    ("V", "Axis width"),
    ("T", "Top"),
    ("C", "Clear"),
    ("R", "Replace"),
    ("Q", "Quit"),
];

/// Install a file logger when `--log-file` is set.
pub fn init_tracing(config: &AppConfig) -> color_eyre::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// `RUST_LOG` directives as given; `warn` when unset or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Everything the event loop mutates between frames.
struct Monitor {
    charts: Vec<SharedChart>,
    theme: Rc<DefaultTheme>,
    source: Box<dyn SampleSource>,
    burst: RandomWalk,
    focused: usize,
    running: bool,
}

impl Monitor {
    fn new(config: &AppConfig) -> Self {
        let source = open_source(config);
        let charts = source
            .labels()
            .iter()
            .map(|label| Rc::new(RefCell::new(build_chart(label, config))))
            .collect();
        info!(source = %source.describe(), "monitor started");
        Self {
            charts,
            theme: Rc::new(DefaultTheme::default()),
            source,
            burst: RandomWalk::new(),
            focused: 0,
            running: true,
        }
    }

    /// Feed whatever the source produced since the last frame.
    fn ingest(&mut self) {
        for reading in self.source.poll() {
            let values = [reading.primary, reading.secondary];
            for (chart, value) in self.charts.iter().zip(values) {
                if let Some(v) = value {
                    chart.borrow_mut().add_data(v);
                }
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        let mut chart = self.charts[self.focused].borrow_mut();
        match code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Tab => self.focused = (self.focused + 1) % self.charts.len(),
            KeyCode::Char('a') => {
                let auto = !chart.auto_scale();
                chart.set_auto_scale(auto);
            }
            KeyCode::Char('p') => {
                let hilite = !chart.hilite_peaks();
                chart.set_hilite_peaks(hilite);
            }
            KeyCode::Char('v') => {
                let width = next_preset(&AXIS_WIDTH_PRESETS, |w| *w == chart.value_width());
                chart.set_value_width(width);
            }
            KeyCode::Char('t') => {
                let top = next_preset(&TOP_PRESETS, |t| (t - chart.top()).abs() < 1e-9);
                chart.set_top(top);
            }
            KeyCode::Char('c') => chart.clear_data(),
            KeyCode::Char('r') => {
                let (width, _) = chart.control().size();
                let count = usize::try_from(width).unwrap_or(0) * 2;
                chart.set_data(&self.burst.burst(count));
            }
            _ => {}
        }
    }

    /// Panel tree for this frame.
    fn layout(&self) -> Node {
        let rows = self
            .charts
            .iter()
            .enumerate()
            .map(|(i, chart)| {
                let mut graph = ChartPanel::new(chart.clone(), self.theme.clone());
                graph.highlighted = i == self.focused;
                let mut info = InfoPanel::new(chart.clone());
                info.highlighted = i == self.focused;
                Node::split(
                    Direction::Horizontal,
                    [Constraint::Percentage(70), Constraint::Percentage(30)],
                    vec![Node::panel(graph), Node::panel(info)],
                )
            })
            .collect::<Vec<_>>();
        let row_share = 100 / u16::try_from(rows.len().max(1)).unwrap_or(1);
        let row_constraints = vec![Constraint::Percentage(row_share); rows.len()];

        Node::split(
            Direction::Vertical,
            [
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
            ],
            vec![
                Node::panel(ParagraphPanel::new(
                    &format!("Spark chart monitor: {}", self.source.describe()),
                    "Source",
                )),
                Node::split(Direction::Vertical, row_constraints, rows),
                Node::panel(ParagraphPanel::key_help(&KEY_HELP, "Controls")),
            ],
        )
    }
}

/// Chart configured from the command line.
fn build_chart(title: &str, config: &AppConfig) -> SparkChart {
    // tiny minimum so the chart always fits its panel
    let mut chart = SparkChart::new(title, 2, 2);
    chart.set_value_width(config.axis_width);
    chart.set_top(config.top);
    chart.set_auto_scale(!config.fixed_scale);
    chart.set_hilite_peaks(!config.no_peaks);
    chart.set_peak_colors(config.peak_color, None);
    chart.control_mut().set_text_color(config.bar_color);
    chart.control_mut().set_back_color(config.back_color);
    chart
}

/// Preset after the one matching `current`; the first preset when none matches.
fn next_preset<T: Copy>(presets: &[T], current: impl Fn(&T) -> bool) -> T {
    let idx = presets.iter().position(current).map_or(0, |i| i + 1);
    presets[idx % presets.len()]
}

pub fn run(config: &AppConfig) -> color_eyre::Result<()> {
    let mut monitor = Monitor::new(config);
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut monitor, Duration::from_millis(config.tick_ms));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    monitor: &mut Monitor,
    frame_time: Duration,
) -> color_eyre::Result<()> {
    while monitor.running {
        let frame_start = Instant::now();

        monitor.ingest();

        let root = monitor.layout();
        terminal
            .draw(|f| root.draw(f, f.area()))
            .wrap_err("failed to draw frame")?;

        while event::poll(Duration::from_millis(0)).wrap_err("failed to poll events")? {
            if let Event::Key(key) = event::read().wrap_err("failed to read event")? {
                if key.kind == KeyEventKind::Press {
                    debug!(key = ?key.code, "key pressed");
                    monitor.handle_key(key.code);
                }
            }
        }

        let elapsed = frame_start.elapsed();
        if monitor.running && elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ratatui::Terminal;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::backend::TestBackend;
    use crate::ui::node::Panel;

    fn monitor(args: &[&str]) -> Monitor {
        let mut argv = vec!["sparkchart-monitor"];
        argv.extend_from_slice(args);
        Monitor::new(&AppConfig::try_parse_from(argv).unwrap())
    }

    #[test]
    fn bare_level_in_rust_log_is_honoured() {
        use tracing::level_filters::LevelFilter;

        assert_eq!(log_filter(Some("trace")).max_level_hint(), Some(LevelFilter::TRACE));
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn charts_follow_config() {
        let m = monitor(&["--axis-width", "6", "--fixed-scale", "--top", "50", "--no-peaks"]);
        assert_eq!(m.charts.len(), 2);
        let c = m.charts[0].borrow();
        assert_eq!(c.value_width(), 6);
        assert_eq!(c.top(), 50.0);
        assert!(!c.auto_scale());
        assert!(!c.hilite_peaks());
    }

    #[test]
    fn colors_reach_the_charts() {
        let m = monitor(&["--bar-color", "green", "--back-color", "blue", "--peak-color", "red"]);
        let c = m.charts[1].borrow();
        assert_eq!(c.control().text_color(), Some(Color::Green));
        assert_eq!(c.control().back_color(), Some(Color::Blue));
        assert_eq!(c.peak_colors(), (Some(Color::Red), None));
    }

    #[test]
    fn colored_chart_paints_configured_colors() {
        let m = monitor(&["--axis-width", "0", "--bar-color", "green", "--peak-color", "red"]);
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        {
            let mut c = m.charts[0].borrow_mut();
            c.control_mut().place(Rect::new(0, 0, 10, 4));
            c.set_data(&[2.0, 4.0]);
        }
        let chart = m.charts[0].clone();
        let panel = ChartPanel::new(chart, m.theme.clone());
        terminal.draw(|f| panel.draw(f, Rect::new(0, 0, 12, 6))).unwrap();

        let buf = terminal.backend().buffer();
        // inner area starts at (1, 1) and is 4 rows tall
        assert_eq!(buf[(1, 4)].fg, Color::Green);
        assert_eq!(buf[(2, 4)].fg, Color::Red);
    }

    #[test]
    fn seeded_source_is_repeatable() {
        let mut a = monitor(&["--seed", "3"]);
        let mut b = monitor(&["--seed", "3"]);
        for _ in 0..10 {
            a.ingest();
            b.ingest();
        }
        assert_eq!(
            a.charts[0].borrow().data().iter().collect::<Vec<_>>(),
            b.charts[0].borrow().data().iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn ingest_feeds_both_charts() {
        let mut m = monitor(&[]);
        m.ingest();
        m.ingest();
        assert_eq!(m.charts[0].borrow().data().len(), 2);
        assert_eq!(m.charts[1].borrow().data().len(), 2);
    }

    #[test]
    fn keys_change_focused_chart_only() {
        let mut m = monitor(&[]);
        m.handle_key(KeyCode::Tab);
        assert_eq!(m.focused, 1);
        m.handle_key(KeyCode::Char('a'));
        m.handle_key(KeyCode::Char('p'));
        m.handle_key(KeyCode::Char('v'));
        m.handle_key(KeyCode::Char('t'));

        let second = m.charts[1].borrow();
        assert!(!second.auto_scale());
        assert!(!second.hilite_peaks());
        assert_eq!(second.value_width(), 10);
        assert_eq!(second.top(), 50.0);

        let first = m.charts[0].borrow();
        assert!(first.auto_scale());
        assert_eq!(first.value_width(), 8);
    }

    #[test]
    fn replace_and_clear() {
        let mut m = monitor(&["--axis-width", "0"]);
        m.handle_key(KeyCode::Char('r'));
        // chart is at its 2x2 minimum until drawn: twice the width, trimmed to it
        assert_eq!(m.charts[0].borrow().data().len(), 2);
        m.handle_key(KeyCode::Char('c'));
        assert!(m.charts[0].borrow().data().is_empty());
    }

    #[test]
    fn quit_stops_loop() {
        let mut m = monitor(&[]);
        m.handle_key(KeyCode::Char('q'));
        assert!(!m.running);
    }

    #[test]
    fn layout_draws_without_panic() {
        let mut m = monitor(&[]);
        for _ in 0..50 {
            m.ingest();
        }
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let root = m.layout();
        terminal.draw(|f| root.draw(f, f.area())).unwrap();

        // drawing placed each chart inside its panel
        let (w, h) = m.charts[0].borrow().control().size();
        assert!(w > 2 && h > 2);
    }

    #[test]
    fn presets_cycle() {
        assert_eq!(next_preset(&AXIS_WIDTH_PRESETS, |w| *w == 8), 10);
        assert_eq!(next_preset(&AXIS_WIDTH_PRESETS, |w| *w == 10), 0);
        assert_eq!(next_preset(&AXIS_WIDTH_PRESETS, |w| *w == 3), 0);
    }
}
