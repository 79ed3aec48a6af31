pub mod aggregate;

pub use aggregate::{
    sample_vouchers, PaymentInfo, PaymentMethod, PaymentVoucher, VoucherDraft, VoucherId,
    VoucherLine, VoucherLineDraft, CODE_PREFIX, DEPARTMENTS,
};
