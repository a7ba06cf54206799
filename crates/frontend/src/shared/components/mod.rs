pub mod date_input;
pub mod stat_card;
pub mod status_badge;
pub mod table_cell_money;

pub use date_input::DateInput;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use table_cell_money::TableCellMoney;
