use storage::models::Registration;

/// Confirmation email sent when a registration reaches the completed state.
/// Carries the QR the pilot presents at the venue gate.
pub fn registration_confirmation(registration: &Registration, qr_image_url: &str) -> String {
    let categories = registration
        .categories
        .iter()
        .map(|c| format!("<li>{c}</li>"))
        .collect::<Vec<_>>()
        .join("\n                ");

    let discount_row = if registration.discount.is_zero() {
        String::new()
    } else {
        format!(
            r#"<tr><td>Descuento</td><td>- COP {}</td></tr>"#,
            registration.discount
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <style>
        body {{ font-family: Arial, sans-serif; background: #f5f5f5; padding: 20px; }}
        .container {{ max-width: 600px; margin: 0 auto; background: white; padding: 40px; border-radius: 10px; }}
        .header {{ background: #FF0000; color: white; padding: 20px; text-align: center; border-radius: 5px; }}
        .content {{ padding: 30px 0; }}
        .qr {{ text-align: center; margin: 30px 0; }}
        table {{ width: 100%; border-collapse: collapse; }}
        td {{ padding: 8px; border-bottom: 1px solid #eee; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Inscripción Confirmada</h1>
        </div>
        <div class="content">
            <p>Hola {first_name} {last_name},</p>
            <p>Tu inscripción fue confirmada. Presenta este código QR en la entrada del evento.</p>
            <div class="qr">
                <img src="{qr_image_url}" alt="Código QR de ingreso" width="300" height="300" />
            </div>
            <h3>Categorías</h3>
            <ul>
                {categories}
            </ul>
            <h3>Resumen de pago</h3>
            <table>
                <tr><td>Número de competición</td><td>{competition_number}</td></tr>
                <tr><td>Precio base</td><td>COP {base_price}</td></tr>
                {discount_row}
                <tr><td><strong>Total</strong></td><td><strong>COP {final_price}</strong></td></tr>
            </table>
            <p style="margin-top: 30px; color: #666; font-size: 12px;">
                Referencia de inscripción: {id}
            </p>
        </div>
    </div>
</body>
</html>"#,
        first_name = registration.first_name,
        last_name = registration.last_name,
        qr_image_url = qr_image_url,
        categories = categories,
        competition_number = registration.competition_number,
        base_price = registration.base_price,
        discount_row = discount_row,
        final_price = registration.final_price,
        id = registration.id,
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use storage::models::payment_status;
    use uuid::Uuid;

    use super::*;

    fn registration() -> Registration {
        Registration {
            id: Uuid::new_v4(),
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            national_id: "123456789".to_string(),
            competition_number: "7".to_string(),
            phone: "3001234567".to_string(),
            email: "ana@example.com".to_string(),
            categories: vec!["115cc Elite".to_string(), "SuperMoto".to_string()],
            league: None,
            coupon_code: None,
            base_price: 100_000.into(),
            discount: 30_000.into(),
            final_price: 70_000.into(),
            commission: 3_500.into(),
            net_to_organizer: 66_500.into(),
            payment_status: payment_status::COMPLETED.to_string(),
            preference_id: None,
            payment_id: None,
            qr_payload: "id|fingerprint".to_string(),
            check_in: false,
            check_in_time: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn template_embeds_pilot_and_qr_details() {
        let reg = registration();
        let html = registration_confirmation(&reg, "https://qr.example/render?x=1");

        assert!(html.contains("Ana Gómez"));
        assert!(html.contains("https://qr.example/render?x=1"));
        assert!(html.contains("115cc Elite"));
        assert!(html.contains("COP 70000"));
        assert!(html.contains(&reg.id.to_string()));
    }

    #[test]
    fn discount_row_is_omitted_when_no_discount_applied() {
        let mut reg = registration();
        reg.discount = 0.into();
        reg.final_price = reg.base_price;

        let html = registration_confirmation(&reg, "https://qr.example/render");

        assert!(!html.contains("Descuento"));
    }
}
