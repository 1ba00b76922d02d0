//! Built-in reference data used when no configuration file exists.

use super::Checklists;
use crate::models::{ChecklistItem, Employee, Job};

pub fn jobs() -> Vec<Job> {
    vec![
        Job::new("J1", "24-0117 Demo Panel Project A"),
        Job::new("J2", "24-0122 Substation Relay Panel"),
        Job::new("J3", "24-0131 Motor Control Lineup"),
    ]
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee::new("GW", "G. Walker"),
        Employee::new("MZ", "M. Zamora"),
        Employee::new("TG", "T. Greene"),
    ]
}

pub fn checklists() -> Checklists {
    Checklists {
        housewire: vec![
            ChecklistItem::new("hw-labels", "Wire labels match schematic"),
            ChecklistItem::new("hw-torque", "Terminations torqued and marked"),
            ChecklistItem::new("hw-ferrules", "Ferrules on all stranded conductors"),
            ChecklistItem::new("hw-duct", "Wire duct fill and covers installed"),
            ChecklistItem::new("hw-ground", "Ground bonding verified"),
            ChecklistItem::flag("hw-mismatch", "Wiring mismatch found"),
        ],
        integration: vec![
            ChecklistItem::new("int-devices", "Device tags match bill of material"),
            ChecklistItem::new("int-mounting", "Devices mounted and secured"),
            ChecklistItem::new("int-relay-fw", "Relay firmware and settings loaded"),
            ChecklistItem::new("int-comms", "Communication links verified"),
            ChecklistItem::flag("int-missing", "Missing or damaged device"),
        ],
        ee: vec![
            ChecklistItem::new("ee-pointtopoint", "Point-to-point check complete"),
            ChecklistItem::new("ee-hipot", "Hi-pot test passed"),
            ChecklistItem::new("ee-ct-polarity", "CT polarity verified"),
            ChecklistItem::new("ee-trip", "Trip circuits functionally tested"),
            ChecklistItem::flag("ee-drawing", "Drawing discrepancy raised"),
            ChecklistItem::flag("ee-retest", "Retest required"),
        ],
    }
}
