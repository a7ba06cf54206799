//! Right-aligned table cell for monetary values
//!
//! ```rust,ignore
//! <TableCellMoney value=deal.amount />
//! <TableCellMoney value=invoice.total bold=true />
//! ```

use crate::shared::format::format_money;
use leptos::prelude::*;

#[component]
pub fn TableCellMoney(
    value: f64,
    /// Bold text (totals)
    #[prop(optional)]
    bold: bool,
) -> impl IntoView {
    view! {
        <td class="table__cell table__cell--right" class:table__cell--bold=bold>
            {format_money(value)}
        </td>
    }
}
