use std::path::Path;

use fhir_structure_renderer::layout::{IconKind, Layout, compute_layout};
use fhir_structure_renderer::layout_dump::LayoutDump;
use fhir_structure_renderer::{
    LayoutConfig, RecordNode, RenderOptions, Theme, parse_resource, render, render_svg,
    render_with_options,
};

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.ends_with("</svg>"), "{fixture}: missing </svg tag");
    assert_eq!(
        svg.matches("<g").count(),
        svg.matches("</g>").count(),
        "{fixture}: unbalanced groups"
    );
}

fn load_fixture(name: &str) -> RecordNode {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    parse_resource(&input).expect("parse failed")
}

fn layout_fixture(name: &str) -> Layout {
    compute_layout(
        &load_fixture(name),
        &Theme::standard(),
        &LayoutConfig::default(),
    )
}

#[test]
fn render_all_fixtures() {
    let fixtures = ["encounter.json", "minimal.json", "extensions.json5"];
    for fixture in fixtures {
        let svg = render(&load_fixture(fixture));
        assert_valid_svg(&svg, fixture);
        assert!(!svg.contains("Could not load font"), "{fixture}: diagnostic output");
    }
}

#[test]
fn minimal_resource_is_a_single_row() {
    let layout = layout_fixture("minimal.json");
    let structure = layout.structure().expect("structure layout");
    assert_eq!(structure.rows.len(), 1);
    let root = &structure.rows[0];
    assert_eq!(root.icon, IconKind::Resource);
    assert!(root.connectors.is_empty());
    assert!(root.is_last);

    let config = LayoutConfig::default();
    assert!(structure.columns.name >= config.min_name_width);
    assert!(structure.columns.name <= config.max_name_width);
}

#[test]
fn encounter_rows_follow_tree_order() {
    let layout = layout_fixture("encounter.json");
    let structure = layout.structure().expect("structure layout");
    let paths: Vec<&str> = structure.rows.iter().map(|row| row.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "Encounter",
            "Encounter.identifier",
            "Encounter.status",
            "Encounter.participant",
            "Encounter.participant.type",
            "Encounter.participant.actor",
            "Encounter.participant.participantRole",
            "Encounter.partOf",
            "Encounter.serviceType",
            "Encounter.length[x]",
            "Encounter.origin",
        ]
    );

    let icons: Vec<IconKind> = structure.rows.iter().map(|row| row.icon).collect();
    assert_eq!(
        icons,
        vec![
            IconKind::Resource,
            IconKind::Element,
            IconKind::Element,
            IconKind::Backbone,
            IconKind::Element,
            IconKind::Reference,
            IconKind::Extension,
            IconKind::Reference,
            IconKind::Element,
            IconKind::Choice,
            IconKind::Extension,
        ]
    );

    // participant owns an extension, so it keeps its through connector.
    assert!(!structure.rows[3].is_last);
    // actor is the last child; the trailing extension takes participant's
    // non-last position among the root's children.
    assert!(structure.rows[5].is_last);
    assert!(!structure.rows[6].is_last);
    // length[x] is the root's last child and owns no extensions.
    assert!(structure.rows[9].is_last);
    assert!(structure.rows[10].is_last);
}

#[test]
fn rows_stack_without_gaps() {
    let layout = layout_fixture("encounter.json");
    let structure = layout.structure().expect("structure layout");
    let config = LayoutConfig::default();

    let mut y = config.title_height + config.header_height;
    for row in &structure.rows {
        assert_eq!(row.y, y, "{}: row does not start where the previous ended", row.path);
        assert!(row.height >= config.min_row_height);
        y += row.height;
    }
    assert!((layout.height - (y + config.bottom_pad)).abs() < 0.01);
    assert_eq!(layout.width, structure.columns.total());

    let status = &structure.rows[2];
    assert!(status.description_lines.len() > 1);
    assert!(status.height > config.min_row_height);
}

#[test]
fn root_extensions_are_appended_after_children() {
    let layout = layout_fixture("extensions.json5");
    let structure = layout.structure().expect("structure layout");
    assert_eq!(structure.rows.len(), 3);
    assert!(structure.rows[1..].iter().all(|row| row.depth == 1));
    assert!(!structure.rows[1].is_last);
    assert!(structure.rows[2].is_last);
}

#[test]
fn usage_annotations_style_the_description() {
    let svg = render(&load_fixture("encounter.json"));
    assert!(svg.contains("class=\"not-used\">Not used</text>"));
    assert!(svg.contains("class=\"todo\">TODO: map to local service"));
}

#[test]
fn typed_references_are_hyperlinked() {
    let svg = render(&load_fixture("encounter.json"));
    assert_eq!(svg.matches("<a xlink:href=").count(), 2);
    assert!(svg.contains("xlink:href=\"https://hl7.org/fhir/references.html\""));
}

#[test]
fn flags_use_symbols() {
    let svg = render(&load_fixture("encounter.json"));
    assert!(svg.contains(">?!\u{03A3}</text>"));
    assert!(svg.contains(">TU</text>"));
    assert!(svg.contains(">N</text>"));
}

#[test]
fn markup_in_text_is_escaped() {
    let svg = render(&load_fixture("extensions.json5"));
    assert!(svg.contains("Carries &lt;markup&gt; &amp; &quot;quotes&quot;"));
    assert!(!svg.contains("<markup>"));
}

#[test]
fn output_is_byte_identical_across_calls() {
    let resource = load_fixture("encounter.json");
    let first = render(&resource);
    let second = render(&resource);
    assert_eq!(first, second);
}

#[test]
fn concurrent_renders_agree() {
    let resource = load_fixture("encounter.json");
    let expected = render(&resource);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| render(&resource))).collect();
        for handle in handles {
            assert_eq!(handle.join().expect("render thread panicked"), expected);
        }
    });
}

#[test]
fn custom_options_flow_into_output() {
    let mut options = RenderOptions::default();
    options.theme.link_color = "#123456".to_string();
    options.layout.title = "Encounter profile".to_string();
    let svg = render_with_options(&load_fixture("minimal.json"), &options);
    assert!(svg.contains("fill: #123456;"));
    assert!(svg.contains(">Encounter profile</text>"));
}

#[test]
fn layout_dump_matches_rendered_rows() {
    let layout = layout_fixture("encounter.json");
    let dump = LayoutDump::from_layout(&layout);
    assert_eq!(dump.rows.len(), 11);
    assert_eq!(dump.width, layout.width);
    let svg = render_svg(&layout, &Theme::standard(), &LayoutConfig::default());
    for row in &dump.rows {
        let name = row.name_lines.first().expect("name line");
        assert!(svg.contains(&format!(">{name}</text>")), "{}: name not rendered", row.path);
    }
}
