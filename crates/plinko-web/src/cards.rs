//! Results presentation: the finalized groups rendered as cards, plus the
//! visibility toggles around them.

use plinko_engine::GroupsReport;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement};

const GROUP_LIST_ID: &str = "groupList";
const RESULTS_WRAPPER_SELECTOR: &str = ".defined-groups-wrapper";
const DROP_BUTTON_SELECTOR: &str = "#particles-drop";

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Rebuild the group card list from a finalized report.
pub fn render_groups(report: &GroupsReport) {
    let Some(document) = document() else {
        return;
    };
    let Some(list) = document.get_element_by_id(GROUP_LIST_ID) else {
        log::warn!("results container #{GROUP_LIST_ID} missing, skipping card render");
        return;
    };
    list.set_inner_html("");

    for (index, group) in report.groups.iter().enumerate() {
        if let Some(card) = build_group_card(&document, index, group) {
            let _ = list.append_child(&card);
        }
    }
}

fn build_group_card(document: &Document, index: usize, members: &[String]) -> Option<Element> {
    let card = document.create_element("div").ok()?;
    card.set_class_name("group-card");

    let header = document.create_element("h3").ok()?;
    header.set_text_content(Some(&format!("Group {}", index + 1)));
    card.append_child(&header).ok()?;

    let body = document.create_element("div").ok()?;
    for (slot, name) in members.iter().enumerate() {
        if let Some(name_card) = build_name_card(document, slot, name) {
            let _ = body.append_child(&name_card);
        }
    }
    card.append_child(&body).ok()?;

    Some(card)
}

fn build_name_card(document: &Document, slot: usize, name: &str) -> Option<Element> {
    let card = document.create_element("div").ok()?;
    card.set_class_name("name-card");

    let header = document.create_element("h3").ok()?;
    header.set_text_content(Some(&format!("Name {}", slot + 1)));
    card.append_child(&header).ok()?;

    let body = document.create_element("p").ok()?;
    body.set_text_content(Some(name));
    card.append_child(&body).ok()?;

    Some(card)
}

/// Show or hide the results wrapper.
pub fn show_results_panel(visible: bool) {
    let Some(wrapper) = document().and_then(|d| d.query_selector(RESULTS_WRAPPER_SELECTOR).ok().flatten())
    else {
        return;
    };
    let class_list = wrapper.class_list();
    let _ = if visible {
        class_list.remove_1("hidden")
    } else {
        class_list.add_1("hidden")
    };
}

/// Enable or disable the "drop" control that starts a division.
pub fn set_drop_enabled(enabled: bool) {
    let Some(button) = document().and_then(|d| d.query_selector(DROP_BUTTON_SELECTOR).ok().flatten())
    else {
        return;
    };
    if let Ok(button) = button.dyn_into::<HtmlButtonElement>() {
        button.set_disabled(!enabled);
    }
}
