//! Rendering helpers: the platform's Persian labels and price formatting.

use onepay_protocol::{ProjectStatus, RequestStatus, UnitStatus};

/// User-facing label for a project's sales lifecycle.
pub fn project_status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::PreSale => "پیش‌فروش",
        ProjectStatus::Active => "فعال",
        ProjectStatus::Completed => "تکمیل‌شده",
    }
}

/// User-facing label for unit availability.
pub fn unit_status_label(status: UnitStatus) -> &'static str {
    match status {
        UnitStatus::Available => "آزاد",
        UnitStatus::Reserved => "رزرو شده",
        UnitStatus::Sold => "فروخته شده",
    }
}

/// User-facing label for a purchase request's lifecycle.
pub fn request_status_label(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Draft => "پیش‌نویس",
        RequestStatus::Submitted => "ثبت شده",
        RequestStatus::PendingPayment => "در انتظار پرداخت",
        RequestStatus::Paid => "پرداخت شده",
        RequestStatus::Rejected => "رد شده",
        RequestStatus::Cancelled => "لغو شده",
    }
}

/// Formats a toman amount with digit grouping; an absent amount renders as
/// "unknown" the way the platform shows it.
pub fn format_price(value: Option<i64>) -> String {
    match value {
        None => "نامشخص".to_string(),
        Some(value) => format!("{} تومان", group_digits(value)),
    }
}

fn group_digits(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_group_thousands() {
        assert_eq!(format_price(Some(9_800_000_000)), "9,800,000,000 تومان");
        assert_eq!(format_price(Some(950)), "950 تومان");
        assert_eq!(format_price(Some(0)), "0 تومان");
    }

    #[test]
    fn absent_price_renders_unknown() {
        assert_eq!(format_price(None), "نامشخص");
    }

    #[test]
    fn labels_match_platform_copy() {
        assert_eq!(unit_status_label(UnitStatus::Available), "آزاد");
        assert_eq!(
            request_status_label(RequestStatus::PendingPayment),
            "در انتظار پرداخت"
        );
        assert_eq!(project_status_label(ProjectStatus::PreSale), "پیش‌فروش");
    }
}
