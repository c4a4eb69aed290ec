//! Black-box flow: import a project file, persist it, pull a snapshot back
//! out and derive all three reports from it.

use anyhow::Result;
use rust_decimal::Decimal;

use auditbook_infra::{InMemoryProjectStore, ProjectStore, import_project};
use auditbook_ledger::{Nature, receipt, t_accounts, trial_balance};

const PROJECT_FILE: &str = r#"{
    "id": 1712000000000,
    "name": "Auditoria Acme 2024",
    "description": "Cierre primer trimestre",
    "date": "2024-04-01",
    "companyName": "Acme SAS",
    "auditorName": "Revisor Fiscal",
    "seats": [
        {
            "id": "018f6f00-0000-7000-8000-000000000001",
            "project_id": 1712000000000,
            "date": "2024-01-15",
            "description": "Venta de contado",
            "details": [
                {"account_code": "110505-Caja General", "description": "Disponible, Caja, Caja General", "debit": "600.50", "credit": 0},
                {"account_code": "110510-Caja Menor", "description": "Disponible, Caja, Caja Menor", "debit": "399.50", "credit": 0},
                {"account_code": "413505-Ventas", "description": "Ingresos, Comercio", "debit": 0, "credit": 1000}
            ]
        },
        {
            "id": "018f6f00-0000-7000-8000-000000000002",
            "project_id": 1712000000000,
            "date": "2024-02-10",
            "description": "Pago proveedor",
            "details": [
                {"account_code": "220505-Proveedores", "description": "Pasivo, Proveedores", "debit": 250, "credit": 0},
                {"account_code": "110505-Caja General", "description": "Disponible, Caja", "debit": 0, "credit": 250},
                {"account_code": "", "description": "fila sin cuenta", "debit": "n/a", "credit": 0}
            ]
        }
    ]
}"#;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn reports_from_an_imported_project() -> Result<()> {
    let store = InMemoryProjectStore::new();
    let imported = import_project(PROJECT_FILE)?;
    let id = imported.id;
    store.save(imported)?;

    let project = store.get(id)?;
    assert_eq!(project.seats.len(), 2);

    // Trial balance: main accounts, blank-code row excluded.
    let tb = trial_balance(&project.seats);
    let codes: Vec<&str> = tb.accounts.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["1105", "4135", "2205"]);

    let caja = &tb.accounts[0];
    assert_eq!(caja.nature, Nature::Debit);
    assert_eq!(caja.final_debit, dec("750.00"));

    let proveedores = &tb.accounts[2];
    assert_eq!(proveedores.nature, Nature::Credit);
    // Credit-natured account with net debit activity flips columns.
    assert_eq!(proveedores.final_debit, dec("250"));
    assert_eq!(proveedores.final_credit, Decimal::ZERO);

    assert_eq!(tb.total_debit, dec("1000.00"));
    assert_eq!(tb.total_credit, dec("1000"));
    assert!(tb.balanced);

    // T-accounts: sub-account detail in seat order.
    let ledger = t_accounts(&project.seats);
    let caja_general = ledger
        .iter()
        .find(|a| a.account.code == "110505")
        .expect("110505 present");
    assert_eq!(caja_general.entries.len(), 2);
    assert_eq!(caja_general.entries[0].date, "2024-01-15");
    assert_eq!(caja_general.entries[1].date, "2024-02-10");
    assert_eq!(caja_general.account.final_debit, dec("350.50"));

    // Receipt for the first seat.
    let voucher = receipt(&project.seats[0]);
    assert_eq!(voucher.number, "018F6");
    assert_eq!(voucher.year, "2024");
    assert!(voucher.balanced);
    assert_eq!(voucher.groups[0].code, "1105");
    assert_eq!(voucher.groups[0].label, "Disponible");
    assert_eq!(voucher.groups[0].sub_accounts.len(), 2);

    Ok(())
}

#[test]
fn seat_editor_write_path_feeds_fresh_reports() -> Result<()> {
    let store = InMemoryProjectStore::new();
    let project = import_project(PROJECT_FILE)?;
    let id = project.id;
    store.save(project)?;

    // Drop the second seat through the seat editor path.
    let mut seats = store.get(id)?.seats;
    seats.truncate(1);
    store.save_seats(id, seats)?;

    let tb = trial_balance(&store.get(id)?.seats);
    assert_eq!(tb.total_debit, dec("1000.00"));
    assert!(tb.balanced);
    assert!(tb.accounts.iter().all(|a| a.code != "2205"));

    Ok(())
}
