pub mod aggregate;

pub use aggregate::{
    sample_requests, BookingDraft, BookingKind, TravelDraft, TravelRequest, TravelRequestId,
    CODE_PREFIX, DEPARTMENTS,
};
