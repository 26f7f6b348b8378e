use dioxus::prelude::*;

/// Scrollable table wrapper.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Table header section. Wraps `DataTableColumn`s in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

/// Table body section.
#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell.
#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row. `highlight` tints the row, e.g. for records needing attention.
#[component]
pub fn DataTableRow(#[props(default = false)] highlight: bool, children: Element) -> Element {
    rsx! {
        tr {
            class: if highlight { "data-table-row highlight" } else { "data-table-row" },
            {children}
        }
    }
}

/// Table data cell.
#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Single full-width row shown when the table has no data.
#[component]
pub fn DataTableEmpty(columns: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{columns}", {children} }
        }
    }
}
