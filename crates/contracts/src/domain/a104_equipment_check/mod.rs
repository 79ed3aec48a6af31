pub mod aggregate;

pub use aggregate::{
    qc_status, sample_checks, EquipmentCheck, EquipmentDraft, QcStatus,
};
