//! Page shells.
//!
//! The real markup lives with the front-end assets; these handlers only
//! give each route a minimal document so navigation, and the guard in front
//! of it, behave like the full site.

use axum::response::Html;

fn shell(title: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html lang=\"es\"><head><meta charset=\"utf-8\">\
         <title>{title}</title></head><body><h1>{title}</h1></body></html>"
    ))
}

pub async fn home() -> Html<String> {
    shell("Home - Albaranes")
}

pub async fn login() -> Html<String> {
    shell("Login - Albaranes")
}

pub async fn register() -> Html<String> {
    shell("Registro - Albaranes")
}

pub async fn clients() -> Html<String> {
    shell("Lista de Clientes - Albaranes")
}

pub async fn client_create() -> Html<String> {
    shell("Crear Cliente - Albaranes")
}

pub async fn client_detail() -> Html<String> {
    shell("Detalle del Cliente")
}

pub async fn projects() -> Html<String> {
    shell("Lista de Proyectos - Albaranes")
}

pub async fn project_create() -> Html<String> {
    shell("Crear Proyecto - Albaranes")
}

pub async fn project_detail() -> Html<String> {
    shell("Detalle del Proyecto")
}

pub async fn delivery_notes() -> Html<String> {
    shell("Lista de Albaranes")
}

pub async fn delivery_note_create() -> Html<String> {
    shell("Crear Albarán - Albaranes")
}
