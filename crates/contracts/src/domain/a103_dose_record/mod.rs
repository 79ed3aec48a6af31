pub mod aggregate;

pub use aggregate::{
    dose_status, sample_doses, DoseDraft, DoseRecord, DoseStatus,
};
