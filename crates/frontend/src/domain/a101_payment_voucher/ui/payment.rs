use crate::shared::icons::icon;
use contracts::domain::a101_payment_voucher::PaymentMethod;
use leptos::prelude::*;

/// One-shot "record payment method" modal for an approved voucher.
#[component]
pub fn PaymentMethodModal(
    /// Voucher code shown in the title.
    code: String,
    on_confirm: Callback<(PaymentMethod, String)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (method_key, set_method_key) = signal("transfer".to_string());
    let (reference, set_reference) = signal(String::new());

    view! {
        <div class="details-container payment-modal">
            <div class="details-header">
                <h3>{format!("Catat Pembayaran {}", code)}</h3>
            </div>

            <div class="details-form">
                <div class="form-group">
                    <label for="payment_method">{"Metode Pembayaran"}</label>
                    <select
                        id="payment_method"
                        prop:value=move || method_key.get()
                        on:change=move |ev| set_method_key.set(event_target_value(&ev))
                    >
                        <option value="transfer">{"Transfer Bank"}</option>
                        <option value="tunai">{"Tunai"}</option>
                        <option value="giro">{"Cek/Giro"}</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="payment_reference">{"Nomor Referensi"}</label>
                    <input
                        type="text"
                        id="payment_reference"
                        prop:value=move || reference.get()
                        on:input=move |ev| set_reference.set(event_target_value(&ev))
                        placeholder="No. transfer / bukti kas / giro (opsional)"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        let method = PaymentMethod::from_key(&method_key.get())
                            .unwrap_or(PaymentMethod::Transfer);
                        on_confirm.run((method, reference.get().trim().to_string()));
                    }
                >
                    {icon("credit-card")}
                    {"Catat"}
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("cancel")}
                    {"Batal"}
                </button>
            </div>
        </div>
    }
}
