use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

const INDEX_TEMPLATE: &str = include_str!("../../static/index.html");
const FALLBACK_LOGO_SVG: &str = include_str!("../../static/logo.svg");
const LOGO_PLACEHOLDER: &str = "{{LOGO_SRC}}";

/// Статические ресурсы страницы, собираются один раз до запуска сервера
#[derive(Debug, Clone)]
pub struct AppAssets {
    index_html: String,
}

impl AppAssets {
    /// Прочитать логотип с диска. Если файла нет, берётся встроенный SVG.
    pub fn prepare(logo_path: &Path) -> Self {
        let logo = match std::fs::read(logo_path) {
            Ok(bytes) => {
                tracing::info!("Logo loaded from {}", logo_path.display());
                Some(bytes)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("{} not found, using built-in SVG logo", logo_path.display());
                None
            }
            Err(e) => {
                tracing::warn!("Cannot read logo {}: {}, using built-in SVG logo", logo_path.display(), e);
                None
            }
        };
        Self::from_logo(logo.as_deref())
    }

    /// Собрать ресурсы из байтов PNG-логотипа (или встроенного SVG при `None`)
    pub fn from_logo(png: Option<&[u8]>) -> Self {
        let logo_data_uri = logo_data_uri(png);
        let index_html = INDEX_TEMPLATE.replace(LOGO_PLACEHOLDER, &logo_data_uri);

        Self { index_html }
    }

    pub fn index_html(&self) -> &str {
        &self.index_html
    }
}

/// PNG кодируется как есть, без логотипа берётся встроенный SVG
fn logo_data_uri(png: Option<&[u8]>) -> String {
    match png {
        Some(bytes) => format!("data:image/png;base64,{}", STANDARD.encode(bytes)),
        None => format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(FALLBACK_LOGO_SVG.as_bytes())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_logo_falls_back_to_svg() {
        let assets = AppAssets::prepare(Path::new("no/such/logo.png"));
        assert!(assets.index_html().contains(&logo_data_uri(None)));
        assert!(logo_data_uri(None).starts_with("data:image/svg+xml;base64,"));
        assert!(!assets.index_html().contains(LOGO_PLACEHOLDER));
    }

    #[test]
    fn test_png_logo_is_embedded() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let assets = AppAssets::from_logo(Some(&png));
        assert_eq!(logo_data_uri(Some(&png)), "data:image/png;base64,iVBORw0KGgo=");
        assert!(assets.index_html().contains("data:image/png;base64,iVBORw0KGgo="));
    }
}
