//! Resource paths, shared by the async and blocking clients.

use crate::models::{OrderId, PieId};

pub(crate) const ACCOUNT_SUMMARY: &str = "/api/v0/equity/account/summary";

pub(crate) const INSTRUMENTS: &str = "/api/v0/equity/metadata/instruments";
pub(crate) const EXCHANGES: &str = "/api/v0/equity/metadata/exchanges";

pub(crate) const ORDERS: &str = "/api/v0/equity/orders";
pub(crate) const ORDERS_MARKET: &str = "/api/v0/equity/orders/market";
pub(crate) const ORDERS_LIMIT: &str = "/api/v0/equity/orders/limit";
pub(crate) const ORDERS_STOP: &str = "/api/v0/equity/orders/stop";
pub(crate) const ORDERS_STOP_LIMIT: &str = "/api/v0/equity/orders/stop_limit";

pub(crate) const POSITIONS: &str = "/api/v0/equity/positions";

pub(crate) const HISTORY_ORDERS: &str = "/api/v0/equity/history/orders";
pub(crate) const HISTORY_DIVIDENDS: &str = "/api/v0/equity/history/dividends";
pub(crate) const HISTORY_TRANSACTIONS: &str = "/api/v0/equity/history/transactions";
pub(crate) const HISTORY_EXPORTS: &str = "/api/v0/equity/history/exports";

pub(crate) const PIES: &str = "/api/v0/equity/pies";

pub(crate) fn order(id: OrderId) -> String {
    format!("{ORDERS}/{id}")
}

pub(crate) fn pie(id: PieId) -> String {
    format!("{PIES}/{id}")
}

pub(crate) fn pie_duplicate(id: PieId) -> String {
    format!("{PIES}/{id}/duplicate")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_paths() {
        assert_eq!(order(OrderId::new(42)), "/api/v0/equity/orders/42");
        assert_eq!(pie(PieId::new(7)), "/api/v0/equity/pies/7");
        assert_eq!(pie_duplicate(PieId::new(7)), "/api/v0/equity/pies/7/duplicate");
    }
}
