//! QR code generation
//!
//! Encodes target URLs as QR images and wraps them as base64 PNG data
//! URLs, the format the frontend renders in `<img>` tags and that the
//! database stores alongside guests and rooms.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::Luma;
use std::io::Cursor;

use crate::utils::{AppError, AppResult};

/// Minimum rendered image size, matches what phone cameras scan reliably
const MIN_QR_DIMENSIONS: u32 = 256;

/// Generate a QR image for `url` as a `data:image/png;base64,` URL
pub fn generate_data_url(url: &str) -> AppResult<String> {
    let code = qrcode::QrCode::new(url.as_bytes())
        .map_err(|e| AppError::validation(format!("Cannot encode URL as QR code: {e}")))?;

    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_QR_DIMENSIONS, MIN_QR_DIMENSIONS)
        .build();

    let mut png = Vec::new();
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| AppError::internal(format!("Failed to encode QR PNG: {e}")))?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
}

/// Build the guest-profile deep link a room QR encodes
///
/// The scanning frontend lands on `/guest-profile` and reads `room` and
/// `name` query parameters.
pub fn guest_profile_url(public_url: &str, room_number: &str, guest_name: &str) -> String {
    format!(
        "{}/guest-profile?room={}&name={}",
        public_url.trim_end_matches('/'),
        urlencoding::encode(room_number),
        urlencoding::encode(guest_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_png(data_url: &str) -> image::DynamicImage {
        let b64 = data_url
            .strip_prefix("data:image/png;base64,")
            .expect("data URL prefix");
        let bytes = STANDARD.decode(b64).expect("valid base64");
        image::load_from_memory(&bytes).expect("valid PNG")
    }

    #[test]
    fn generated_qr_is_a_square_png_of_scannable_size() {
        let data_url = generate_data_url("https://hotel.example/guest-profile?room=204").unwrap();
        let img = decode_png(&data_url);
        assert_eq!(img.width(), img.height());
        assert!(img.width() >= MIN_QR_DIMENSIONS);
    }

    #[test]
    fn same_url_twice_yields_two_independent_valid_images() {
        let url = "https://hotel.example/";
        let a = generate_data_url(url).unwrap();
        let b = generate_data_url(url).unwrap();
        // No uniqueness constraint: both decode on their own
        decode_png(&a);
        decode_png(&b);
        assert_eq!(a, b);
    }

    #[test]
    fn guest_profile_url_encodes_query_params() {
        let url = guest_profile_url("https://hotel.example/", "20 4", "Ada Lovelace");
        assert_eq!(
            url,
            "https://hotel.example/guest-profile?room=20%204&name=Ada%20Lovelace"
        );
    }
}
