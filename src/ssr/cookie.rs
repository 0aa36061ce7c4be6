/// Cookie helpers for the login server functions.
use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::{HeaderValue, SET_COOKIE};
use leptos::prelude::*;
use leptos_actix::ResponseOptions;

/// Where to go after logging in. Set by whatever sent the user to the login page.
pub const REDIRECT_TO_COOKIE: &str = "redirect_to";

pub fn use_response_options() -> Result<ResponseOptions, ServerFnError> {
    use_context::<ResponseOptions>().ok_or_else(|| ServerFnError::new("No response options object"))
}

/// Cookie value, `None` when missing or empty.
pub fn get_cookie(request: &HttpRequest, cookie_name: &str) -> Option<String> {
    request
        .cookie(cookie_name)
        .map(|c| c.value().to_string())
        .filter(|value| !value.is_empty())
}

/// HTTP only cookie carrying the token the auth provider granted.
pub fn session_cookie(name: &str, token: String) -> Cookie<'static> {
    Cookie::build(name.to_string(), token)
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(true)
        .finish()
}

pub fn set_cookie(
    response_options: &ResponseOptions,
    cookie: &Cookie,
) -> Result<(), ServerFnError> {
    response_options.append_header(
        SET_COOKIE,
        HeaderValue::from_str(&cookie.to_string())
            .map_err(|err| ServerFnError::new(format!("Failed to encode cookie: {err}")))?,
    );
    Ok(())
}

pub fn remove_cookie(response_options: &ResponseOptions, name: &str) -> Result<(), ServerFnError> {
    let mut removal_cookie = Cookie::named(name.to_string());
    removal_cookie.set_path("/"); // Otherwise they won't affect most cookies we set.
    removal_cookie.make_removal();
    set_cookie(response_options, &removal_cookie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_http_only() {
        let cookie = session_cookie("session", "tok".to_string());
        assert_eq!(cookie.name(), "session");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn reads_non_empty_cookies_only() {
        let request = actix_web::test::TestRequest::default()
            .cookie(Cookie::new(REDIRECT_TO_COOKIE, "/dashboards"))
            .cookie(Cookie::new("login_error", ""))
            .to_http_request();
        assert_eq!(
            get_cookie(&request, REDIRECT_TO_COOKIE).as_deref(),
            Some("/dashboards")
        );
        assert_eq!(get_cookie(&request, "login_error"), None);
        assert_eq!(get_cookie(&request, "missing"), None);
    }
}
