use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;
use uuid::Uuid;

/// Characters left untouched by `encodeURIComponent`-style escaping.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const HYPHENATED_GUID_LEN: usize = 36;

/// Accept absolute https URLs pointing at a SharePoint Online host.
///
/// The API path is appended to the site URL, so a query or fragment is rejected.
pub fn is_valid_sharepoint_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };

    url.scheme() == "https"
        && url.query().is_none()
        && url.fragment().is_none()
        && url
            .host_str()
            .is_some_and(|host| host.to_ascii_lowercase().contains(".sharepoint."))
}

/// Only the hyphenated 8-4-4-4-12 form counts; braced, urn and simple forms do not.
pub fn is_valid_guid(value: &str) -> bool {
    value.len() == HYPHENATED_GUID_LEN && Uuid::try_parse(value).is_ok()
}

/// Resolve a site- or server-relative file path to a server-relative one.
pub fn server_relative_path(web_url: &str, file_url: &str) -> String {
    let web_path = web_path(web_url);

    let normalized = file_url.replace('\\', "/");
    let is_server_relative = normalized.starts_with('/');
    let file_path = format!("/{}", normalized.trim_matches('/'));

    if web_path.is_empty() {
        return file_path;
    }

    if is_server_relative {
        let file_lower = file_path.to_lowercase();
        let web_lower = web_path.to_lowercase();
        if file_lower == web_lower || file_lower.starts_with(&format!("{web_lower}/")) {
            return file_path;
        }
    }

    format!("{web_path}{file_path}")
}

/// Escape a value for use inside a quoted OData string literal in the URL path.
pub fn encode_path_component(value: &str) -> String {
    utf8_percent_encode(&value.replace('\'', "''"), COMPONENT).to_string()
}

fn web_path(web_url: &str) -> String {
    let Ok(url) = Url::parse(web_url) else {
        return String::new();
    };

    percent_decode_str(url.path())
        .decode_utf8_lossy()
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharepoint_url_requires_https_sharepoint_host() {
        assert!(is_valid_sharepoint_url("https://contoso.sharepoint.com"));
        assert!(is_valid_sharepoint_url(
            "https://contoso.sharepoint.com/sites/project-x"
        ));
        assert!(!is_valid_sharepoint_url("foo"));
        assert!(!is_valid_sharepoint_url("http://contoso.sharepoint.com"));
        assert!(!is_valid_sharepoint_url("https://contoso.example.com"));
    }

    #[test]
    fn sharepoint_url_rejects_query_and_fragment() {
        assert!(!is_valid_sharepoint_url(
            "https://contoso.sharepoint.com/sites/project-x?foo=1"
        ));
        assert!(!is_valid_sharepoint_url(
            "https://contoso.sharepoint.com/sites/project-x#home"
        ));
    }

    #[test]
    fn guid_accepts_hyphenated_form_only() {
        assert!(is_valid_guid("f09c4efe-b8c0-4e89-a166-03418661b89b"));
        assert!(is_valid_guid("0CD891EF-AFCE-4E55-B836-FCE03286CCCF"));
        assert!(!is_valid_guid("12345"));
        assert!(!is_valid_guid("f09c4efeb8c04e89a16603418661b89b"));
        assert!(!is_valid_guid("{f09c4efe-b8c0-4e89-a166-03418661b89b}"));
    }

    #[test]
    fn server_relative_path_keeps_server_relative_input() {
        let path = server_relative_path(
            "https://contoso.sharepoint.com/sites/project-x",
            "/sites/project-x/Documents/Test1.docx",
        );
        assert_eq!(path, "/sites/project-x/Documents/Test1.docx");
    }

    #[test]
    fn server_relative_path_prefixes_site_relative_input() {
        let path = server_relative_path(
            "https://contoso.sharepoint.com/sites/project-x/",
            "Documents\\Test1.docx",
        );
        assert_eq!(path, "/sites/project-x/Documents/Test1.docx");
    }

    #[test]
    fn server_relative_path_always_prefixes_site_relative_input() {
        let path = server_relative_path(
            "https://contoso.sharepoint.com/sites/project-x",
            "sites/project-x/Lib/a.docx",
        );
        assert_eq!(path, "/sites/project-x/sites/project-x/Lib/a.docx");
    }

    #[test]
    fn server_relative_path_matches_web_case_insensitively() {
        let path = server_relative_path(
            "https://contoso.sharepoint.com/sites/Project-X",
            "/sites/project-x/Documents/Test1.docx",
        );
        assert_eq!(path, "/sites/project-x/Documents/Test1.docx");
    }

    #[test]
    fn server_relative_path_on_tenant_root() {
        let path = server_relative_path("https://contoso.sharepoint.com", "/Documents/Test1.docx/");
        assert_eq!(path, "/Documents/Test1.docx");
    }

    #[test]
    fn encode_escapes_slashes_and_quotes() {
        assert_eq!(
            encode_path_component("/sites/project-x/Documents/Test1.docx"),
            "%2Fsites%2Fproject-x%2FDocuments%2FTest1.docx"
        );
        assert_eq!(
            encode_path_component("/Shared Documents/O'Brien.docx"),
            "%2FShared%20Documents%2FO''Brien.docx"
        );
    }
}
