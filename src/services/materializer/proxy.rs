/// Literal token in the nginx template replaced with the domain.
pub const NGINX_PLACEHOLDER: &str = "DOMAIN_NGINX";

pub fn render_proxy_config(template: &str, domain: &str) -> String {
    template.replace(NGINX_PLACEHOLDER, domain)
}
