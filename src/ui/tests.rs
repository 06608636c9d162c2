use insta::assert_snapshot;

use crate::config::LayoutConfig;
use crate::system::rank::{AggregatedProcess, Ranking};
use crate::system::snapshot::MemorySnapshot;
use crate::ui::layout::ChartLayout;
use crate::ui::theme::{Gradient, Palette};
use crate::ui::{RenderOptions, chart, draw, header};

fn make_snapshot() -> MemorySnapshot {
    MemorySnapshot {
        total_bytes: 1_073_741_824,
        free_bytes: 671_088_640,
    }
}

fn make_ranking() -> Ranking {
    let entries = [
        ("/usr/bin/alpha", 204_800),
        ("beta", 102_400),
        ("gamma", 20_480),
    ]
    .into_iter()
    .map(|(name, kb)| AggregatedProcess {
        name: name.to_string(),
        total_resident_kb: kb,
    })
    .collect();
    Ranking {
        entries,
        total_kb: 409_600,
    }
}

fn options(width: usize, palette: Palette) -> RenderOptions {
    RenderOptions {
        layout: ChartLayout::compute(width, &LayoutConfig::default()),
        palette,
        gradient: Gradient::default(),
        clear_screen: false,
        show_process_total: false,
    }
}

fn render_to_string(ranking: &Ranking, options: &RenderOptions) -> String {
    let mut buf = Vec::new();
    draw(&mut buf, &make_snapshot(), ranking, options).unwrap();
    String::from_utf8(buf).unwrap()
}

fn plain_bar(filled: usize, empty: usize) -> String {
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[test]
fn header_plain_snapshot() {
    let mut buf = Vec::new();
    header::render(&mut buf, &make_snapshot(), &Palette::plain()).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.starts_with('\n'));
    assert_snapshot!(text.trim_start(), @r"
    ╭─────────── System Memory Usage ───────────╮
    │ Total Memory: 1024.00 MB
    │ Used Memory:  384.00 MB (37.5%)
    │ Free Memory:  640.00 MB
    ╰───────────────────────────────────────────╯

    === Top Processes by Memory Usage ===
    ");
}

#[test]
fn rows_scale_against_largest_process() {
    let text = render_to_string(&make_ranking(), &options(80, Palette::plain()));
    let rows: Vec<&str> = text.lines().skip(8).collect();

    assert_eq!(
        rows,
        vec![
            format!("{}  200.00 MB /usr/bin/alpha", plain_bar(23, 0)),
            format!("{}  100.00 MB beta", plain_bar(12, 11)),
            format!("{}   20.00 MB gamma", plain_bar(2, 21)),
        ]
    );
}

#[test]
fn narrow_terminal_truncates_names() {
    let ranking = Ranking {
        entries: vec![AggregatedProcess {
            name: "/Applications/Google Chrome.app/Contents/Frameworks/Helper".to_string(),
            total_resident_kb: 1024,
        }],
        total_kb: 1024,
    };
    let opts = options(40, Palette::plain());
    assert_eq!(opts.layout.name_width, 13);

    let line = chart::row(&ranking.entries[0], ranking.scale_max(), &opts);
    assert_eq!(
        line,
        format!("{}    1.00 MB /.../Helpe...", plain_bar(10, 0))
    );
}

#[test]
fn ansi_row_uses_gradient_colors() {
    let ranking = make_ranking();
    let opts = options(80, Palette::ansi());
    let max = ranking.scale_max();

    let alert = chart::row(&ranking.entries[0], max, &opts);
    assert!(alert.starts_with("\x1b[31m█"));
    assert!(alert.contains("\x1b[1m 200.00 MB\x1b[0m \x1b[2m/usr/bin/alpha\x1b[0m"));

    let warning = chart::row(&ranking.entries[1], max, &opts);
    assert!(warning.starts_with("\x1b[33m"));

    let normal = chart::row(&ranking.entries[2], max, &opts);
    assert!(normal.starts_with("\x1b[32m"));
    assert!(normal.contains("\x1b[2m░"));
}

#[test]
fn empty_ranking_renders_only_header() {
    let text = render_to_string(&Ranking::default(), &options(80, Palette::plain()));
    assert_eq!(text.lines().count(), 8);
    assert!(text.ends_with("=== Top Processes by Memory Usage ===\n"));
}

#[test]
fn clear_screen_comes_first() {
    let mut opts = options(80, Palette::ansi());
    opts.clear_screen = true;
    let text = render_to_string(&make_ranking(), &opts);
    assert!(text.starts_with("\x1b[2J\x1b[1;1H"));
}

#[test]
fn process_total_footer() {
    let mut opts = options(80, Palette::plain());
    opts.show_process_total = true;
    let text = render_to_string(&make_ranking(), &opts);
    assert_eq!(text.lines().last(), Some("Total (all processes): 400.00 MB"));
}

#[test]
fn bar_never_overflows_its_length() {
    let gradient = Gradient::default();
    let palette = Palette::plain();
    for value in [0, 1, 49, 50, 51, 99, 100] {
        let bar = chart::bar(value, 100, 10, &palette, &gradient);
        assert_eq!(bar.chars().count(), 10);
    }
    // A zero maximum is treated as one.
    assert_eq!(chart::bar(0, 0, 4, &palette, &gradient), "░░░░");
}
