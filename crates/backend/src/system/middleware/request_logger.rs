use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог метод, путь, статус, размер ответа и длительность.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} | body error: {} | {}ms",
                method,
                path,
                parts.status.as_u16(),
                e,
                start.elapsed().as_millis()
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    if parts.status.is_success() {
        tracing::info!(
            "{} {} -> {} | {} bytes | {}ms",
            method,
            path,
            parts.status.as_u16(),
            bytes.len(),
            start.elapsed().as_millis()
        );
    } else {
        tracing::warn!(
            "{} {} -> {} | {} bytes | {}ms",
            method,
            path,
            parts.status.as_u16(),
            bytes.len(),
            start.elapsed().as_millis()
        );
    }

    Response::from_parts(parts, Body::from(bytes))
}
