use crate::domain::common::{AggregateId, BaseAggregate};
use crate::shared::crud::lifecycle::{Approval, Decision, LifecycleError};
use crate::shared::crud::store::StoreRecord;
use crate::shared::crud::validate::{require_amount, require_date, require_text, FieldErrors, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique travel request identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TravelRequestId(pub Uuid);

impl TravelRequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for TravelRequestId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TravelRequestId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

pub const CODE_PREFIX: &str = "TRV";

pub const DEPARTMENTS: [&str; 4] = ["Keuangan", "Produksi", "Logistik", "Umum & HRD"];

// ============================================================================
// Booking variants
// ============================================================================

/// What the request books. A request carries exactly one of these; the
/// discriminant replaces the original pile of optional fields whose
/// presence was checked ad hoc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingKind {
    Flight {
        airline: String,
        route: String,
        fare: f64,
    },
    Hotel {
        hotel: String,
        nights: u32,
        rate_per_night: f64,
    },
    /// Daily allowance (uang harian) for the whole party.
    TravelCost {
        allowance_per_day: f64,
        days: u32,
    },
}

impl BookingKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flight { .. } => "Tiket Pesawat",
            Self::Hotel { .. } => "Hotel",
            Self::TravelCost { .. } => "Uang Harian",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Flight { .. } => "flight",
            Self::Hotel { .. } => "hotel",
            Self::TravelCost { .. } => "travel_cost",
        }
    }

    /// Estimated cost of this booking for `participants` people.
    pub fn estimated_cost(&self, participants: usize) -> f64 {
        let headcount = participants.max(1) as f64;
        match self {
            Self::Flight { fare, .. } => fare * headcount,
            Self::Hotel {
                nights,
                rate_per_night,
                ..
            } => f64::from(*nights) * rate_per_night * headcount,
            Self::TravelCost {
                allowance_per_day,
                days,
            } => allowance_per_day * f64::from(*days) * headcount,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Surat perjalanan dinas (travel request)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRequest {
    #[serde(flatten)]
    pub base: BaseAggregate<TravelRequestId>,

    pub requester: String,
    pub department: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Travel party, requester included.
    pub participants: Vec<String>,
    pub booking: BookingKind,
    /// Derived: booking cost estimate for the whole party.
    pub estimated_cost: f64,
    pub approval: Approval,
}

impl TravelRequest {
    pub fn submit(&mut self) -> Result<(), LifecycleError> {
        self.approval.submit()?;
        self.base.touch();
        Ok(())
    }

    pub fn decide(&mut self, decision: Decision, keterangan: &str) -> Result<(), LifecycleError> {
        self.approval.decide(decision, keterangan)?;
        self.base.touch();
        Ok(())
    }
}

impl StoreRecord for TravelRequest {
    type Id = TravelRequestId;

    fn record_id(&self) -> TravelRequestId {
        self.base.id
    }

    fn display_label(&self) -> String {
        self.base.code.clone()
    }
}

// ============================================================================
// Editor draft
// ============================================================================

/// Form-side mirror of [`BookingKind`]: the selector key plus the string
/// inputs of every variant, so switching kinds does not lose typed values.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    /// "flight" | "hotel" | "travel_cost"
    pub kind: String,
    pub airline: String,
    pub route: String,
    pub fare: String,
    pub hotel: String,
    pub nights: String,
    pub rate_per_night: String,
    pub allowance_per_day: String,
    pub days: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            kind: "travel_cost".to_string(),
            airline: String::new(),
            route: String::new(),
            fare: String::new(),
            hotel: String::new(),
            nights: String::new(),
            rate_per_night: String::new(),
            allowance_per_day: String::new(),
            days: String::new(),
        }
    }
}

impl BookingDraft {
    pub fn from_booking(booking: &BookingKind) -> Self {
        let mut draft = Self {
            kind: booking.key().to_string(),
            ..Self::default()
        };
        match booking {
            BookingKind::Flight {
                airline,
                route,
                fare,
            } => {
                draft.airline = airline.clone();
                draft.route = route.clone();
                draft.fare = fare.to_string();
            }
            BookingKind::Hotel {
                hotel,
                nights,
                rate_per_night,
            } => {
                draft.hotel = hotel.clone();
                draft.nights = nights.to_string();
                draft.rate_per_night = rate_per_night.to_string();
            }
            BookingKind::TravelCost {
                allowance_per_day,
                days,
            } => {
                draft.allowance_per_day = allowance_per_day.to_string();
                draft.days = days.to_string();
            }
        }
        draft
    }

    fn validate_into(&self, errors: &mut FieldErrors) {
        match self.kind.as_str() {
            "flight" => {
                require_text(errors, "airline", &self.airline, "Maskapai");
                require_text(errors, "route", &self.route, "Rute");
                require_amount(errors, "fare", &self.fare, "Harga tiket");
            }
            "hotel" => {
                require_text(errors, "hotel", &self.hotel, "Nama hotel");
                require_count(errors, "nights", &self.nights, "Jumlah malam");
                require_amount(errors, "rate_per_night", &self.rate_per_night, "Tarif per malam");
            }
            "travel_cost" => {
                require_amount(
                    errors,
                    "allowance_per_day",
                    &self.allowance_per_day,
                    "Uang harian",
                );
                require_count(errors, "days", &self.days, "Jumlah hari");
            }
            _ => errors.push("booking_kind", "Jenis pemesanan wajib dipilih"),
        }
    }

    /// Materialize the selected variant from the form inputs.
    pub fn to_booking(&self) -> BookingKind {
        match self.kind.as_str() {
            "flight" => BookingKind::Flight {
                airline: self.airline.trim().to_string(),
                route: self.route.trim().to_string(),
                fare: self.fare.trim().parse().unwrap_or(0.0),
            },
            "hotel" => BookingKind::Hotel {
                hotel: self.hotel.trim().to_string(),
                nights: self.nights.trim().parse().unwrap_or(0),
                rate_per_night: self.rate_per_night.trim().parse().unwrap_or(0.0),
            },
            _ => BookingKind::TravelCost {
                allowance_per_day: self.allowance_per_day.trim().parse().unwrap_or(0.0),
                days: self.days.trim().parse().unwrap_or(0),
            },
        }
    }
}

fn require_count(errors: &mut FieldErrors, field: &str, value: &str, label: &str) {
    match value.trim().parse::<u32>() {
        Ok(v) if v > 0 => {}
        Ok(_) => errors.push(field, format!("{} harus lebih dari 0", label)),
        Err(_) => errors.push(field, format!("{} bukan angka yang valid", label)),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TravelDraft {
    pub description: String,
    pub requester: String,
    pub department: String,
    pub start_date: String,
    pub end_date: String,
    /// One participant name per line in the form.
    pub participants: Vec<String>,
    pub booking: BookingDraft,
}

impl TravelDraft {
    pub fn template(today: NaiveDate) -> Self {
        Self {
            start_date: today.format("%Y-%m-%d").to_string(),
            end_date: today.format("%Y-%m-%d").to_string(),
            participants: vec![String::new()],
            ..Self::default()
        }
    }

    pub fn from_record(request: &TravelRequest) -> Self {
        Self {
            description: request.base.description.clone(),
            requester: request.requester.clone(),
            department: request.department.clone(),
            start_date: request.start_date.format("%Y-%m-%d").to_string(),
            end_date: request.end_date.format("%Y-%m-%d").to_string(),
            participants: request.participants.clone(),
            booking: BookingDraft::from_booking(&request.booking),
        }
    }

    fn trimmed_participants(&self) -> Vec<String> {
        self.participants
            .iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    }

    pub fn build(
        &self,
        id: TravelRequestId,
        code: String,
        existing: Option<&TravelRequest>,
    ) -> TravelRequest {
        let participants = self.trimmed_participants();
        let booking = self.booking.to_booking();
        let estimated_cost = booking.estimated_cost(participants.len());
        let start_date =
            NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d").unwrap_or_default();
        let end_date =
            NaiveDate::parse_from_str(self.end_date.trim(), "%Y-%m-%d").unwrap_or_default();

        let base = match existing {
            Some(prev) => {
                let mut base = prev.base.clone();
                base.description = self.description.trim().to_string();
                base.touch();
                base
            }
            None => BaseAggregate::new(id, code, self.description.trim().to_string()),
        };

        TravelRequest {
            base,
            requester: self.requester.trim().to_string(),
            department: self.department.clone(),
            start_date,
            end_date,
            participants,
            booking,
            estimated_cost,
            approval: existing.map(|p| p.approval.clone()).unwrap_or_default(),
        }
    }
}

impl Validate for TravelDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "description", &self.description, "Keperluan");
        require_text(&mut errors, "requester", &self.requester, "Pemohon");
        require_text(&mut errors, "department", &self.department, "Departemen");
        let start = require_date(&mut errors, "start_date", &self.start_date, "Tanggal berangkat");
        let end = require_date(&mut errors, "end_date", &self.end_date, "Tanggal kembali");
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                errors.push("end_date", "Tanggal kembali mendahului tanggal berangkat");
            }
        }
        if self.trimmed_participants().is_empty() {
            errors.push("participants", "Minimal satu peserta");
        }
        self.booking.validate_into(&mut errors);
        errors.into_result()
    }
}

// ============================================================================
// Sample data
// ============================================================================

fn seed(
    code: &str,
    description: &str,
    requester: &str,
    department: &str,
    dates: ((i32, u32, u32), (i32, u32, u32)),
    participants: &[&str],
    booking: BookingKind,
    approval: Approval,
) -> TravelRequest {
    let participants: Vec<String> = participants.iter().map(|p| p.to_string()).collect();
    let estimated_cost = booking.estimated_cost(participants.len());
    TravelRequest {
        base: BaseAggregate::new(
            TravelRequestId::new_v4(),
            code.to_string(),
            description.to_string(),
        ),
        requester: requester.to_string(),
        department: department.to_string(),
        start_date: NaiveDate::from_ymd_opt(dates.0 .0, dates.0 .1, dates.0 .2).unwrap_or_default(),
        end_date: NaiveDate::from_ymd_opt(dates.1 .0, dates.1 .1, dates.1 .2).unwrap_or_default(),
        participants,
        booking,
        estimated_cost,
        approval,
    }
}

/// Seed data shown on every load. The store is never persisted.
pub fn sample_requests() -> Vec<TravelRequest> {
    let mut approved = Approval::pending();
    let _ = approved.decide(Decision::Approve, "Sudah termasuk rencana audit tahunan");

    vec![
        seed(
            "TRV-2026-004",
            "Audit internal cabang Surabaya",
            "Rahmat Hidayat",
            "Keuangan",
            ((2026, 8, 17), (2026, 8, 19)),
            &["Rahmat Hidayat", "Dewi Lestari"],
            BookingKind::Flight {
                airline: "Garuda Indonesia".to_string(),
                route: "CGK-SUB".to_string(),
                fare: 1_850_000.0,
            },
            Approval::pending(),
        ),
        seed(
            "TRV-2026-003",
            "Pelatihan proteksi radiasi BAPETEN",
            "Agus Santoso",
            "Produksi",
            ((2026, 8, 10), (2026, 8, 14)),
            &["Agus Santoso"],
            BookingKind::Hotel {
                hotel: "Hotel Santika Jakarta".to_string(),
                nights: 4,
                rate_per_night: 750_000.0,
            },
            approved,
        ),
        seed(
            "TRV-2026-002",
            "Survey pemasok baru Bandung",
            "Siti Nurhaliza",
            "Logistik",
            ((2026, 8, 6), (2026, 8, 7)),
            &["Siti Nurhaliza", "Budi Prasetyo"],
            BookingKind::TravelCost {
                allowance_per_day: 350_000.0,
                days: 2,
            },
            Approval::draft(),
        ),
        seed(
            "TRV-2026-001",
            "Rekrutmen kampus Yogyakarta",
            "Dewi Lestari",
            "Umum & HRD",
            ((2026, 7, 27), (2026, 7, 28)),
            &["Dewi Lestari"],
            BookingKind::TravelCost {
                allowance_per_day: 350_000.0,
                days: 2,
            },
            Approval::pending(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TravelDraft {
        TravelDraft {
            description: "Kunjungan pabrik".into(),
            requester: "Budi Prasetyo".into(),
            department: "Produksi".into(),
            start_date: "2026-09-01".into(),
            end_date: "2026-09-03".into(),
            participants: vec!["Budi Prasetyo".into(), " Rina Kusuma ".into(), "".into()],
            booking: BookingDraft {
                kind: "hotel".into(),
                hotel: "Hotel Melati".into(),
                nights: "2".into(),
                rate_per_night: "500000".into(),
                ..BookingDraft::default()
            },
        }
    }

    #[test]
    fn test_estimated_cost_per_kind() {
        let flight = BookingKind::Flight {
            airline: "Citilink".into(),
            route: "CGK-DPS".into(),
            fare: 1_000_000.0,
        };
        assert_eq!(flight.estimated_cost(3), 3_000_000.0);

        let hotel = BookingKind::Hotel {
            hotel: "H".into(),
            nights: 2,
            rate_per_night: 500_000.0,
        };
        assert_eq!(hotel.estimated_cost(2), 2_000_000.0);

        let allowance = BookingKind::TravelCost {
            allowance_per_day: 350_000.0,
            days: 4,
        };
        assert_eq!(allowance.estimated_cost(1), 1_400_000.0);
        // A request without named participants still counts one traveler.
        assert_eq!(allowance.estimated_cost(0), 1_400_000.0);
    }

    #[test]
    fn test_build_cleans_participants_and_derives_cost() {
        let request = valid_draft().build(TravelRequestId::new_v4(), "TRV-2026-010".into(), None);
        assert_eq!(
            request.participants,
            vec!["Budi Prasetyo".to_string(), "Rina Kusuma".to_string()]
        );
        assert_eq!(request.estimated_cost, 2_000_000.0);
        assert_eq!(request.booking.key(), "hotel");
    }

    #[test]
    fn test_booking_roundtrip_through_draft() {
        let booking = BookingKind::Flight {
            airline: "Garuda Indonesia".into(),
            route: "CGK-SUB".into(),
            fare: 1_850_000.0,
        };
        let draft = BookingDraft::from_booking(&booking);
        assert_eq!(draft.to_booking(), booking);
    }

    #[test]
    fn test_validation_follows_selected_kind() {
        let mut draft = valid_draft();
        draft.booking.kind = "flight".into();
        // Flight fields are empty, hotel fields are filled: only the
        // selected variant's fields are validated.
        let errors = draft.validate().unwrap_err();
        assert!(errors.get("airline").is_some());
        assert!(errors.get("hotel").is_none());
    }

    #[test]
    fn test_date_order_checked() {
        let mut draft = valid_draft();
        draft.end_date = "2026-08-31".into();
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get("end_date"),
            Some("Tanggal kembali mendahului tanggal berangkat")
        );
    }

    #[test]
    fn test_requires_a_participant() {
        let mut draft = valid_draft();
        draft.participants = vec!["   ".into()];
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("participants"), Some("Minimal satu peserta"));
    }
}
