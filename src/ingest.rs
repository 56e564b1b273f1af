//! 画像取り込みモジュール
//!
//! 宣言されたコンテンツタイプが `image/*` の場合のみ、
//! 表示用のdata URIに変換する。それ以外は黙って無視する。

use crate::error::{LeafDoctorError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use sha2::{Digest, Sha256};
use std::path::Path;

/// 判定できなかった場合のコンテンツタイプ
pub const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// 表示用にエンコード済みの画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// 宣言されたMIMEタイプ（小文字）
    pub mime: String,
    /// data:<mime>;base64,<payload>
    pub data_url: String,
    /// 元データのSHA-256（16進）
    pub digest: String,
    pub byte_len: usize,
}

impl EncodedImage {
    /// data URIから元のバイト列を復元
    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        let payload = self
            .data_url
            .split_once(',')
            .map(|(_, p)| p)
            .ok_or_else(|| LeafDoctorError::ImageLoad("data URIの形式が不正です".into()))?;
        STANDARD
            .decode(payload)
            .map_err(|e| LeafDoctorError::ImageLoad(e.to_string()))
    }

    /// ログ用の短いID
    pub fn short_id(&self) -> &str {
        &self.digest[..self.digest.len().min(12)]
    }
}

/// 画像のコンテンツタイプか
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.trim().to_ascii_lowercase().starts_with("image/")
}

/// 画像ならdata URIに変換、それ以外は None
pub fn encode(payload: &[u8], content_type: &str) -> Option<EncodedImage> {
    if !is_image_content_type(content_type) {
        return None;
    }

    let mime = content_type.trim().to_ascii_lowercase();
    let data_url = format!("data:{};base64,{}", mime, STANDARD.encode(payload));
    let digest = hex::encode(Sha256::digest(payload));

    Some(EncodedImage {
        mime,
        data_url,
        digest,
        byte_len: payload.len(),
    })
}

/// バイト列（優先）と拡張子からコンテンツタイプを推定
pub fn detect_content_type(path: &Path, bytes: &[u8]) -> String {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type().to_string();
    }

    ImageFormat::from_path(path)
        .map(|f| f.to_mime_type().to_string())
        .unwrap_or_else(|_| UNKNOWN_CONTENT_TYPE.to_string())
}

/// 読み込んだファイル
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// ファイルを読み込み、コンテンツタイプを判定
pub fn read_file(path: &Path) -> Result<ImageFile> {
    if !path.is_file() {
        return Err(LeafDoctorError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let content_type = detect_content_type(path, &bytes);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ImageFile {
        file_name,
        bytes,
        content_type,
    })
}
