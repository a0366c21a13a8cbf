//! Integration tests for image file output

use prompt_tapestry::client::ImagePayload;
use prompt_tapestry::response::ImageSaver;

const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[tokio::test]
async fn test_save_writes_decoded_bytes_with_prompt_slug() {
    let dir = tempfile::tempdir().unwrap();
    let saver = ImageSaver::new(dir.path());

    let mut data = PNG_HEADER.to_vec();
    data.extend_from_slice(b"rest of image");
    let payload = ImagePayload::from_bytes(&data);

    let path = saver
        .save(&payload, "A majestic lion, wearing a crown!", 0)
        .await
        .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "a-majestic-lion-wearing-a-crown-1.png"
    );
    assert_eq!(tokio::fs::read(&path).await.unwrap(), data);
}

#[tokio::test]
async fn test_save_creates_missing_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out").join("images");
    let saver = ImageSaver::new(&nested);

    let payload = ImagePayload::from_bytes(&PNG_HEADER);
    let path = saver.save(&payload, "a cat", 3).await.unwrap();

    assert!(path.starts_with(&nested));
    assert!(path.exists());
    assert!(path.to_str().unwrap().ends_with("a-cat-4.png"));
}
