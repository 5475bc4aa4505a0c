use dioxus::prelude::*;
use releases::TypeSelection;

#[component]
pub fn ReleaseFilters(filters: Vec<String>, selection: Signal<TypeSelection>) -> Element {
    rsx! {
      div { class: "release-filters",
        h5 { class: "filters-heading", "Type" }
        for filter in filters {
          FilterOption { key: "{filter}", label: filter.clone(), selection }
        }
        if !selection.read().is_empty() {
          button {
            class: "filters-clear",
            onclick: move |_| selection.write().clear(),
            "Clear"
          }
        }
      }
    }
}

#[component]
fn FilterOption(label: String, selection: Signal<TypeSelection>) -> Element {
    let is_selected = selection.read().is_selected(&label);
    let toggled = label.clone();

    rsx! {
      div {
        class: "filter-option",
        onclick: move |_| {
            selection.write().toggle(&toggled);
        },
        div {
          class: "filter-checkbox",
          class: if is_selected { "filter-checkbox-selected" },
          if is_selected {
            svg {
              class: "filter-check-icon",
              fill: "none",
              stroke: "currentColor",
              view_box: "0 0 24 24",
              path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "4",
                d: "M5 13l4 4L19 7",
              }
            }
          }
        }
        span { "{label}" }
      }
    }
}
