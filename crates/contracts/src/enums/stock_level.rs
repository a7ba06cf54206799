/// Stock availability bucket shown next to an inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

/// Below this many units an item counts as low stock
pub const LOW_STOCK_THRESHOLD: i64 = 10;

impl StockLevel {
    pub fn from_stock(stock: i64) -> Self {
        if stock <= 0 {
            StockLevel::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockLevel::Low
        } else {
            StockLevel::InStock
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "Out of Stock",
            StockLevel::Low => "Low Stock",
            StockLevel::InStock => "In Stock",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "error",
            StockLevel::Low => "warning",
            StockLevel::InStock => "success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets() {
        assert_eq!(StockLevel::from_stock(0), StockLevel::OutOfStock);
        assert_eq!(StockLevel::from_stock(1), StockLevel::Low);
        assert_eq!(StockLevel::from_stock(9), StockLevel::Low);
        assert_eq!(StockLevel::from_stock(10), StockLevel::InStock);
    }

    #[test]
    fn test_negative_stock_is_out_of_stock() {
        assert_eq!(StockLevel::from_stock(-3), StockLevel::OutOfStock);
        assert_eq!(StockLevel::from_stock(-3).badge_variant(), "error");
    }
}
