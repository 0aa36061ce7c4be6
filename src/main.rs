#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use leptos::config::get_configuration;
    use leptos::prelude::*;
    use leptos_actix::{LeptosRoutes, generate_route_list};
    use leptos_meta::MetaTags;
    use portico::components::app::*;
    use portico::settings::AuthSettings;
    use portico::ssr::app_state::AppState;
    use portico::ssr::auth::UnconfiguredAuth;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let conf = get_configuration(None).map_err(std::io::Error::other)?;
    let addr = conf.leptos_options.site_addr;

    let settings = AuthSettings::from_env().map_err(|err| {
        log::error!("Invalid login settings: {err}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    })?;
    log::info!(
        "Login form {}, signup {}, {} OAuth provider(s)",
        if settings.disable_login_form { "disabled" } else { "enabled" },
        if settings.disable_user_signup { "disabled" } else { "enabled" },
        settings.oauth_providers.len(),
    );
    log::warn!("No authentication backend wired in; all logins will be refused");
    let app_state = AppState::new(settings, UnconfiguredAuth);

    HttpServer::new(move || {
        let routes = generate_route_list(App);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.clone().to_string();
        let app_state = app_state.clone();

        App::new()
            // serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // serve other assets from the `assets` directory
            .service(Files::new("/assets", &site_root))
            .service(favicon)
            .leptos_routes_with_context(
                routes,
                move || {
                    let app_state = app_state.clone();
                    provide_context(app_state);
                },
                {
                    let leptos_options = leptos_options.clone();
                    move || {
                        view! {
                            <!DOCTYPE html>
                            <html lang="en">
                                <head>
                                    <meta charset="utf-8" />
                                    <meta
                                        name="viewport"
                                        content="width=device-width, initial-scale=1"
                                    />
                                    <AutoReload options=leptos_options.clone() />
                                    <HydrationScripts options=leptos_options.clone() />
                                    <MetaTags />
                                </head>
                                <body>
                                    <App />
                                </body>
                            </html>
                        }
                    }
                },
            )
            .app_data(web::Data::new(leptos_options.to_owned()))
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::config::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // to run: `trunk serve --open --features csr`
    use portico::components::app::*;

    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
