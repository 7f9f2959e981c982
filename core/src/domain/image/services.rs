use crate::domain::{
    common::entities::app_errors::CoreError,
    image::entities::{ALLOWED_UPLOAD_EXTENSIONS, ImageFormat, ImagePayload, SelectedImage},
};

/// Reads the full content of the selected image and pairs it with the
/// declared media type sent to the model.
pub fn prepare_image(
    image: &SelectedImage,
    declared_media_type: &str,
) -> Result<ImagePayload, CoreError> {
    if image.is_empty() {
        return Err(CoreError::Processing(
            "the selected image contains no data".to_string(),
        ));
    }

    if ImageFormat::sniff(&image.data).is_none() {
        return Err(CoreError::Processing(
            "cannot identify image file".to_string(),
        ));
    }

    Ok(ImagePayload {
        mime_type: declared_media_type.to_string(),
        data: image.data.clone(),
    })
}

/// Upload tab filter. Camera captures are never filtered.
pub fn ensure_upload_allowed(image: &SelectedImage) -> Result<(), CoreError> {
    match image.extension() {
        Some(ext) if ALLOWED_UPLOAD_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(CoreError::Invalid(format!(
            "unsupported file type, expected one of: {}",
            ALLOWED_UPLOAD_EXTENSIONS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::domain::image::entities::ImageSource;

    const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    fn image(data: &'static [u8]) -> SelectedImage {
        SelectedImage::new(
            ImageSource::Camera,
            None,
            None,
            Bytes::from_static(data),
        )
    }

    #[test]
    fn test_prepare_image_uses_declared_media_type() {
        let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
        let payload = prepare_image(&image(png), "image/jpeg").unwrap();

        assert_eq!(payload.mime_type, "image/jpeg");
        assert_eq!(payload.data.as_ref(), png);
    }

    #[test]
    fn test_prepare_image_keeps_every_byte() {
        let payload = prepare_image(&image(JPEG_HEADER), "image/jpeg").unwrap();
        assert_eq!(payload.data.len(), JPEG_HEADER.len());
    }

    #[test]
    fn test_prepare_image_rejects_empty_content() {
        let err = prepare_image(&image(b""), "image/jpeg").unwrap_err();
        assert!(matches!(err, CoreError::Processing(_)));
        assert!(err.to_string().starts_with("Error processing image"));
    }

    #[test]
    fn test_prepare_image_rejects_unreadable_content() {
        let err = prepare_image(&image(b"definitely not a picture"), "image/jpeg").unwrap_err();
        assert_eq!(
            err,
            CoreError::Processing("cannot identify image file".to_string())
        );
    }

    #[test]
    fn test_sniff_formats() {
        assert_eq!(ImageFormat::sniff(JPEG_HEADER), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(
            ImageFormat::sniff(b"RIFF\x10\0\0\0WEBPVP8 "),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::sniff(b"\xFF\xD8"), None);
    }

    fn upload(file_name: Option<&str>) -> SelectedImage {
        SelectedImage::new(
            ImageSource::Upload,
            file_name.map(str::to_string),
            None,
            Bytes::from_static(JPEG_HEADER),
        )
    }

    #[test]
    fn test_upload_filter() {
        assert!(ensure_upload_allowed(&upload(Some("lunch.JPG"))).is_ok());
        assert!(ensure_upload_allowed(&upload(Some("lunch.jpeg"))).is_ok());
        assert!(ensure_upload_allowed(&upload(Some("plate.png"))).is_ok());
        assert!(ensure_upload_allowed(&upload(Some("plate.gif"))).is_err());
        assert!(ensure_upload_allowed(&upload(Some("no_extension"))).is_err());
        assert!(ensure_upload_allowed(&upload(None)).is_err());
    }
}
