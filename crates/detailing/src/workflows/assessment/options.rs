use serde::Serialize;

use super::catalog::PriceTable;
use super::domain::{service_label, ServiceType, Severity};
use super::engine::format_price;

/// Bookable service picked manually when the customer skipped the self-assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
    pub label: String,
    pub severity: Severity,
    pub service_type: ServiceType,
    pub list_price: u32,
    pub price_display: String,
}

/// Every severity/service-type pairing, worst severity first.
pub fn service_options(prices: &PriceTable) -> Vec<ServiceOption> {
    Severity::worst_first()
        .into_iter()
        .flat_map(|severity| {
            ServiceType::ordered().into_iter().map(move |service_type| {
                let list_price = prices.list_price(severity, service_type);
                ServiceOption {
                    label: service_label(severity, service_type),
                    severity,
                    service_type,
                    list_price,
                    price_display: format_price(list_price),
                }
            })
        })
        .collect()
}

pub fn find_service_option<'a>(
    options: &'a [ServiceOption],
    label: &str,
) -> Option<&'a ServiceOption> {
    options.iter().find(|option| option.label == label.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_nine_options_severe_first() {
        let options = service_options(&PriceTable::standard());

        assert_eq!(options.len(), 9);
        assert_eq!(options[0].label, "🌊 Severe / Flooded Condition (Interior Only)");
        assert_eq!(options[0].list_price, 2000);
        assert_eq!(options[2].label, "🌊 Severe / Flooded Condition (Full Service)");
        assert_eq!(options[2].price_display, "₱3500");
        assert_eq!(options[8].label, "🚗 Light Condition (Full Service)");
        assert_eq!(options[8].list_price, 800);
    }

    #[test]
    fn finds_options_by_label() {
        let options = service_options(&PriceTable::standard());

        let found = find_service_option(&options, " 🚙 Moderate Condition (Exterior Only) ")
            .expect("option present");
        assert_eq!(found.severity, Severity::Moderate);
        assert_eq!(found.service_type, ServiceType::ExteriorOnly);
        assert_eq!(found.list_price, 900);
        assert!(find_service_option(&options, "Ceramic coating").is_none());
    }
}
