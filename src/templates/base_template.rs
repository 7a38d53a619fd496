/// Base template trait providing common properties for all templates.
pub trait BaseTemplate {
    fn api_hostname(&self) -> &str;
    fn base_url(&self) -> &str;
}

/// Macro to implement BaseTemplate for a struct with standard fields
#[macro_export]
macro_rules! impl_base_template {
    ($struct_name:ty) => {
        impl $crate::templates::BaseTemplate for $struct_name {
            fn api_hostname(&self) -> &str {
                &self.api_hostname
            }
            fn base_url(&self) -> &str {
                &self.base_url
            }
        }
    };
}
