//! Jobsight Dashboard
//!
//! Job-Portal Analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Login against the portal API (bearer token per browser session)
//! - Users / jobs / applications totals
//! - Role, job-type, company and applications-over-time charts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the job-portal REST API over HTTP; fetched
//! collections are cached in memory for five minutes, and every chart is
//! re-derived from that snapshot on render.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
