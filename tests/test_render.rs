use labeltree::model::LabelTreeBuilder;
use labeltree::render::{
    ContentSpec, Document, HeaderSpec, RenderConfig, RenderSurface, rebuild, render, to_html, to_inner_html,
};
use pretty_assertions::assert_eq;

const MOUNT: &str = "id_rapidwords";

fn rebuild_default(labels: &[&str]) -> (Document, usize) {
    let (mut doc, mount) = Document::checklist(MOUNT, labels);
    rebuild(&mut doc, &mount, &RenderConfig::default());
    (doc, mount)
}

// --- MARKUP ---
#[test]
fn test_single_label_markup() {
    let (doc, mount) = rebuild_default(&["1 Universe"]);

    let expected = concat!(
        r#"<div id="id_rapidwords" class="accordion">"#,
        r#"<div class="card">"#,
        r#"<div class="card-header"><div class="form-check">"#,
        r#"<input type="checkbox" name="rapidwords" value="0" id="id_rapidwords_0" class="form-check-input">"#,
        r##"<div id="base-rw-1" class="form-check-label" data-toggle="collapse" data-target="#rw-1" aria-expanded="false" aria-controls="rw-1">1 Universe</div>"##,
        r#"</div></div>"#,
        r##"<div class="collapse" id="rw-1" aria-labelledby="base-rw-1" data-parent="#id_rapidwords"></div>"##,
        r#"</div>"#,
        r#"</div>"#,
    );
    assert_eq!(to_html(&doc, mount), expected);
}

#[test]
fn test_nested_groups_point_to_parent_content() {
    let (doc, mount) = rebuild_default(&["3 Language", "3.2 Talk", "3.2.1 Word"]);

    let talk = doc.find_by_id(mount, "rw-3-2").unwrap();
    assert!(doc.has_class(talk, "collapse"));
    assert_eq!(doc.attribute(talk, "data-parent"), Some("#rw-3"));
    assert_eq!(doc.attribute(talk, "aria-labelledby"), Some("base-rw-3-2"));

    // collapse > nested div > card of 3.2.1
    let nested = doc.element_children(talk);
    assert_eq!(nested.len(), 1);
    let cards = doc.element_children(nested[0]);
    assert_eq!(cards.len(), 1);
    assert!(doc.has_class(cards[0], "card"));
    assert!(doc.find_by_id(cards[0], "base-rw-3-2-1").is_some());

    let word = doc.find_by_id(mount, "rw-3-2-1").unwrap();
    assert_eq!(doc.attribute(word, "data-parent"), Some("#rw-3-2"));
    assert!(doc.element_children(word).is_empty());
}

#[test]
fn test_header_ids_and_toggle_attributes() {
    let (doc, mount) = rebuild_default(&["3.2.1 Water"]);
    let header = doc.find_by_id(mount, "base-rw-3-2-1").unwrap();
    assert_eq!(doc.attribute(header, "data-target"), Some("#rw-3-2-1"));
    assert_eq!(doc.attribute(header, "aria-controls"), Some("rw-3-2-1"));
    assert_eq!(doc.attribute(header, "data-toggle"), Some("collapse"));
    assert_eq!(doc.text_content(header), "3.2.1 Water");
}

#[test]
fn test_synthetic_nodes_show_full_key() {
    let (doc, mount) = rebuild_default(&["1.1 leaf only"]);
    let header = doc.find_by_id(mount, "base-rw-1").unwrap();
    assert_eq!(doc.text_content(header), "1");
    // No control for a node no label terminates at
    let check = doc.parent(header).unwrap();
    assert!(doc.descendants_by_tag(check, "input").is_empty());
}

#[test]
fn test_expanded_config() {
    let (mut doc, mount) = Document::checklist(MOUNT, &["1 A"]);
    let config = RenderConfig::default()
        .with_expanded(true)
        .with_header_prefix("head-")
        .with_id_prefix("sd-");
    rebuild(&mut doc, &mount, &config);

    let content = doc.find_by_id(mount, "sd-1").unwrap();
    assert_eq!(doc.attribute(content, "class"), Some("collapse show"));
    let header = doc.find_by_id(mount, "head-sd-1").unwrap();
    assert_eq!(doc.attribute(header, "aria-expanded"), Some("true"));
}

// --- MOUNT REPLACEMENT ---
#[test]
fn test_mount_children_replaced_by_top_level_groups() {
    let (mut doc, mount) = Document::checklist(MOUNT, &["1 A", "2 B", "1.1 C", "3.4 D", "2 B again"]);
    let original = doc.children(mount).to_vec();
    assert_eq!(original.len(), 5);

    rebuild(&mut doc, &mount, &RenderConfig::default());

    let groups = doc.children(mount).to_vec();
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(|&g| doc.has_class(g, "card")));
    assert!(original.iter().all(|&o| !groups.contains(&o) && doc.parent(o).is_none()));
    assert!(doc.descendants_by_tag(mount, "label").is_empty());
    assert!(doc.has_class(mount, "accordion"));
}

#[test]
fn test_one_header_per_distinct_key() {
    let (doc, mount) = rebuild_default(&["1 A", "1.1.1 B", "2 C", "1 A2"]);
    let headers: Vec<_> = doc
        .descendants(mount)
        .into_iter()
        .filter(|&n| doc.has_class(n, "form-check-label"))
        .map(|n| doc.attribute(n, "id").unwrap().to_string())
        .collect();
    assert_eq!(headers, vec!["base-rw-1", "base-rw-1-1", "base-rw-1-1-1", "base-rw-2"]);
}

#[test]
fn test_ids_are_unique_for_similar_keys() {
    let (doc, mount) = rebuild_default(&["1-2 Dash", "1.2 Dot", "_5 Low", ".5 Dot first"]);
    let ids: Vec<_> = doc
        .descendants(mount)
        .into_iter()
        .filter_map(|n| doc.attribute(n, "id"))
        .filter(|id| id.starts_with("rw-") || id.starts_with("base-"))
        .collect();

    assert_eq!(ids.len(), 12);
    for (i, id) in ids.iter().enumerate() {
        assert!(!ids[i + 1..].contains(id), "duplicate id {id}");
    }
    let dash = doc.find_by_id(mount, "base-rw-1_2d2").unwrap();
    assert_eq!(doc.text_content(dash), "1-2 Dash");
    assert_eq!(doc.attribute(dash, "data-target"), Some("#rw-1_2d2"));
}

#[test]
fn test_deep_label_renders_on_small_stack() {
    // Nesting far deeper than the stack would allow one frame per level
    let html = std::thread::Builder::new()
        .stack_size(128 * 1024)
        .spawn(|| {
            let deep = vec!["1"; 1000].join(".");
            let label = format!("{deep} Deep");
            let (doc, mount) = rebuild_default(&[label.as_str()]);
            to_html(&doc, mount)
        })
        .unwrap()
        .join()
        .unwrap();

    assert_eq!(html.matches(r#"class="card""#).count(), 1000);
    assert!(html.contains("Deep</div>"));
}

#[test]
fn test_empty_checklist_renders_nothing() {
    let (doc, mount) = rebuild_default(&[]);
    assert!(doc.children(mount).is_empty());
    assert_eq!(to_inner_html(&doc, mount), "");
}

#[test]
fn test_rebuild_twice_keeps_accordion() {
    let (mut doc, mount) = Document::checklist(MOUNT, &["1 Universe", "1.1 Sky"]);
    rebuild(&mut doc, &mount, &RenderConfig::default());
    let html = to_html(&doc, mount);
    let inputs = doc.descendants_by_tag(mount, "input");

    let tree = rebuild(&mut doc, &mount, &RenderConfig::default());
    assert!(tree.is_empty());
    assert_eq!(to_html(&doc, mount), html);
    assert_eq!(doc.descendants_by_tag(mount, "input"), inputs);
}

// --- CONTROL RELOCATION ---
#[test]
fn test_controls_are_moved_not_copied() {
    let (mut doc, mount) = Document::checklist(MOUNT, &["1 Universe", "1.1 Sky"]);
    let inputs_before = doc.descendants_by_tag(mount, "input");
    let num_nodes_before = doc.num_nodes();

    let tree = rebuild(&mut doc, &mount, &RenderConfig::default());

    let inputs_after = doc.descendants_by_tag(mount, "input");
    assert_eq!(inputs_before, inputs_after);

    // Each input now sits in the header of its own node
    for (input, key) in inputs_before.iter().zip(["1", "1.1"]) {
        let header_id = format!("base-{}", tree.find(key).unwrap().id().unwrap());
        let header = doc.find_by_id(mount, &header_id).unwrap();
        assert_eq!(doc.parent(*input), doc.parent(header));
        assert!(doc.has_class(*input, "form-check-input"));
    }

    // No input element was created during rendering
    let created = doc.num_nodes() - num_nodes_before;
    let created_inputs = (num_nodes_before..doc.num_nodes())
        .filter(|&n| doc.tag(n) == Some("input"))
        .count();
    assert!(created > 0);
    assert_eq!(created_inputs, 0);
}

#[test]
fn test_overwritten_label_loses_its_control() {
    let (mut doc, mount) = Document::checklist(MOUNT, &["1 First", "1 Second"]);
    let inputs = doc.descendants_by_tag(mount, "input");
    rebuild(&mut doc, &mount, &RenderConfig::default());

    let rendered = doc.descendants_by_tag(mount, "input");
    assert_eq!(rendered, vec![inputs[1]]);
    assert!(!doc.contains(mount, inputs[0]));
}

// --- CUSTOM SURFACE ---
/// Surface recording the calls it receives.
#[derive(Default)]
struct RecordingSurface {
    items: Vec<(usize, String)>,
    controls: Vec<Option<String>>,
    calls: Vec<String>,
    next_container: usize,
}

impl RenderSurface for RecordingSurface {
    type Item = usize;
    type Control = String;
    type Container = usize;

    fn label_items(&self, _mount: &usize) -> Vec<(usize, String)> {
        self.items.clone()
    }

    fn container_id(&self, _container: &usize) -> Option<String> {
        None
    }

    fn prepare_mount(&mut self, _mount: &usize) {
        self.calls.push("prepare".to_string());
    }

    fn detach_control(&mut self, item: &usize) -> Option<String> {
        self.controls[*item].take()
    }

    fn append_group(&mut self, parent: &usize) -> usize {
        self.next_container += 1;
        self.calls.push(format!("group {} in {parent}", self.next_container));
        self.next_container
    }

    fn append_header(&mut self, group: &usize, header: &HeaderSpec<'_>, control: Option<String>) {
        self.calls.push(format!("header {} in {group} with {control:?}", header.text));
    }

    fn append_content(&mut self, group: &usize, content: &ContentSpec<'_>) -> usize {
        self.next_container += 1;
        self.calls.push(format!("content {} in {group} parent {:?}", content.id, content.parent_id));
        self.next_container
    }

    fn append_nested(&mut self, content: &usize) -> usize {
        self.next_container += 1;
        self.calls.push(format!("nested {} in {content}", self.next_container));
        self.next_container
    }
}

#[test]
fn test_render_call_order_on_custom_surface() {
    let mut surface = RecordingSurface {
        controls: vec![Some("cb0".to_string()), None],
        ..Default::default()
    };
    let tree = LabelTreeBuilder::parse_items([("1 A", Some(0)), ("1.1 B", Some(1))]);
    render(&tree, &mut surface, &0, &RenderConfig::default());

    assert_eq!(
        surface.calls,
        vec![
            "prepare",
            "group 1 in 0",
            "header 1 A in 1 with Some(\"cb0\")",
            "content rw-1 in 1 parent None",
            "nested 3 in 2",
            "group 4 in 3",
            "header 1.1 B in 4 with None",
            "content rw-1-1 in 4 parent Some(\"rw-1\")",
        ]
    );
}

#[test]
fn test_rebuild_uses_surface_items() {
    let mut surface = RecordingSurface {
        items: vec![(0, " 2 Person ".to_string()), (1, "2.1 Body".to_string())],
        controls: vec![Some("a".to_string()), Some("b".to_string())],
        ..Default::default()
    };
    let tree = rebuild(&mut surface, &0, &RenderConfig::default());

    assert_eq!(tree.find("2").unwrap().source_item(), Some(&0));
    assert_eq!(tree.find("2.1").unwrap().source_item(), Some(&1));
    assert!(surface.controls.iter().all(Option::is_none));
}
