//! Receipt (voucher): one seat rendered as a formal accounting document.
//!
//! Line items are grouped main account → sub-account → auxiliary, reusing the
//! same prefix grouper as the other reports. Comma-split description segments
//! supply the display labels; none of that affects monetary figures.

use rust_decimal::Decimal;

use auditbook_projects::Seat;

use crate::group::{Granularity, group_by_prefix, postings};

/// Printable voucher for one seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Voucher number: first five characters of the seat id, uppercased.
    pub number: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub description: String,
    /// Main-account groups in insertion order.
    pub groups: Vec<ReceiptGroup>,
    /// Raw totals over every line of the seat, blank codes included.
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub balanced: bool,
}

/// One 4-digit main account on the voucher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptGroup {
    pub code: String,
    /// First comma segment of the group's first line description.
    pub label: String,
    /// Raw (unfolded) sums over the group's lines.
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub sub_accounts: Vec<ReceiptSubAccount>,
}

/// One 6-digit sub-account nested under a main account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptSubAccount {
    pub code: String,
    /// Second comma segment of the sub-account's first line description.
    pub label: String,
    pub lines: Vec<ReceiptLine>,
}

/// One auxiliary line under a sub-account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    /// Full code segment of the line's account.
    pub code: String,
    /// Third comma segment of the line description, falling back to the
    /// account's display name.
    pub label: String,
    /// The "parciales" column: the debit when nonzero, otherwise the credit.
    pub partial: Decimal,
}

/// Comma-split description segments, trimmed; empty input yields none.
pub fn description_parts(description: &str) -> Vec<&str> {
    if description.is_empty() {
        return Vec::new();
    }
    description.split(',').map(str::trim).collect()
}

fn part(description: &str, idx: usize) -> &str {
    description_parts(description).get(idx).copied().unwrap_or("")
}

/// Build the voucher for one seat.
pub fn receipt(seat: &Seat) -> Receipt {
    let groups = group_by_prefix(postings(std::slice::from_ref(seat)), Granularity::Main)
        .iter()
        .map(|main| {
            let mut total_debit = Decimal::ZERO;
            let mut total_credit = Decimal::ZERO;
            for posting in &main.postings {
                total_debit += posting.line.debit;
                total_credit += posting.line.credit;
            }

            let first_description = main
                .postings
                .first()
                .map(|p| p.line.description.as_str())
                .unwrap_or("");

            let sub_accounts = group_by_prefix(main.postings.iter().copied(), Granularity::Sub)
                .iter()
                .map(|sub| {
                    let sub_description = sub
                        .postings
                        .first()
                        .map(|p| p.line.description.as_str())
                        .unwrap_or("");

                    ReceiptSubAccount {
                        code: sub.code.clone(),
                        label: part(sub_description, 1).to_string(),
                        lines: sub
                            .postings
                            .iter()
                            .map(|posting| {
                                let third = part(&posting.line.description, 2);
                                let label = if third.is_empty() {
                                    posting.line.account_code.display_name()
                                } else {
                                    third
                                };
                                let partial = if posting.line.debit != Decimal::ZERO {
                                    posting.line.debit
                                } else {
                                    posting.line.credit
                                };

                                ReceiptLine {
                                    code: posting.line.account_code.code().to_string(),
                                    label: label.to_string(),
                                    partial,
                                }
                            })
                            .collect(),
                    }
                })
                .collect();

            ReceiptGroup {
                code: main.code.clone(),
                label: part(first_description, 0).to_string(),
                total_debit,
                total_credit,
                sub_accounts,
            }
        })
        .collect();

    let (year, month, day) = split_date(&seat.date);
    let totals = seat.totals();

    Receipt {
        number: seat
            .id
            .to_string()
            .chars()
            .take(5)
            .collect::<String>()
            .to_uppercase(),
        day,
        month,
        year,
        description: seat.description.clone(),
        groups,
        total_debit: totals.total_debit,
        total_credit: totals.total_credit,
        balanced: totals.balanced(),
    }
}

fn split_date(date: &str) -> (String, String, String) {
    let mut parts = date.splitn(3, '-');
    let year = parts.next().unwrap_or("").to_string();
    let month = parts.next().unwrap_or("").to_string();
    let day = parts.next().unwrap_or("").to_string();
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditbook_core::ProjectId;
    use auditbook_projects::LineItem;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn sale_seat() -> Seat {
        let mut seat = Seat::new(ProjectId::from_millis(1));
        seat.date = "2024-04-09".to_string();
        seat.description = "Venta de contado".to_string();
        seat.line_items = vec![
            LineItem::new("110505-Caja General", dec("600"), Decimal::ZERO)
                .with_description("Disponible, Caja, Caja General"),
            LineItem::new("110510-Caja Menor", dec("400"), Decimal::ZERO)
                .with_description("Disponible, Caja, Caja Menor"),
            LineItem::new("413505-Ventas", Decimal::ZERO, dec("1000"))
                .with_description("Ingresos, Comercio"),
        ];
        seat
    }

    #[test]
    fn nests_main_then_sub_then_auxiliaries() {
        let receipt = receipt(&sale_seat());

        assert_eq!(receipt.groups.len(), 2);
        let caja = &receipt.groups[0];
        assert_eq!(caja.code, "1105");
        assert_eq!(caja.sub_accounts.len(), 2);
        assert_eq!(caja.sub_accounts[0].code, "110505");
        assert_eq!(caja.sub_accounts[1].code, "110510");
        assert_eq!(caja.sub_accounts[0].lines.len(), 1);

        let ventas = &receipt.groups[1];
        assert_eq!(ventas.code, "4135");
        assert_eq!(ventas.sub_accounts[0].code, "413505");
    }

    #[test]
    fn group_totals_are_raw_sums_not_folded() {
        let receipt = receipt(&sale_seat());
        let caja = &receipt.groups[0];
        assert_eq!(caja.total_debit, dec("1000"));
        assert_eq!(caja.total_credit, Decimal::ZERO);
    }

    #[test]
    fn labels_come_from_comma_segments_with_name_fallback() {
        let receipt = receipt(&sale_seat());
        let caja = &receipt.groups[0];
        assert_eq!(caja.label, "Disponible");
        assert_eq!(caja.sub_accounts[0].label, "Caja");
        assert_eq!(caja.sub_accounts[0].lines[0].label, "Caja General");

        // Two-segment description: the auxiliary falls back to the account name.
        let ventas = &receipt.groups[1];
        assert_eq!(ventas.sub_accounts[0].lines[0].label, "Ventas");
    }

    #[test]
    fn partial_prefers_debit_then_credit() {
        let receipt = receipt(&sale_seat());
        assert_eq!(receipt.groups[0].sub_accounts[0].lines[0].partial, dec("600"));
        assert_eq!(receipt.groups[1].sub_accounts[0].lines[0].partial, dec("1000"));
    }

    #[test]
    fn header_carries_voucher_number_date_parts_and_totals() {
        let seat = sale_seat();
        let receipt = receipt(&seat);

        assert_eq!(receipt.number.len(), 5);
        assert_eq!(receipt.number, receipt.number.to_uppercase());
        assert_eq!(
            (receipt.year.as_str(), receipt.month.as_str(), receipt.day.as_str()),
            ("2024", "04", "09")
        );
        assert_eq!(receipt.total_debit, dec("1000"));
        assert_eq!(receipt.total_credit, dec("1000"));
        assert!(receipt.balanced);
    }

    #[test]
    fn missing_date_yields_empty_parts() {
        let mut seat = sale_seat();
        seat.date = String::new();
        let receipt = receipt(&seat);
        assert_eq!(receipt.month, "");
        assert_eq!(receipt.day, "");
    }

    #[test]
    fn description_parts_trim_and_handle_empty() {
        assert_eq!(description_parts("a, b ,c"), vec!["a", "b", "c"]);
        assert!(description_parts("").is_empty());
    }

    #[test]
    fn undescribed_lines_leave_labels_empty() {
        let mut seat = sale_seat();
        for line in &mut seat.line_items {
            line.description = String::new();
        }

        let voucher = receipt(&seat);
        let caja = &voucher.groups[0];
        assert_eq!(caja.label, "");
        assert_eq!(caja.sub_accounts[0].label, "");
        // With no third segment the auxiliary falls back to the account name.
        assert_eq!(caja.sub_accounts[0].lines[0].label, "Caja General");
    }
}
