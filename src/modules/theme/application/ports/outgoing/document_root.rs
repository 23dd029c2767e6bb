/// The page's root element: one theme attribute plus inline style variables.
pub trait DocumentRoot {
    fn set_theme_attribute(&mut self, theme: &str);

    fn theme_attribute(&self) -> Option<String>;

    fn set_style_property(&mut self, name: &str, value: &str);

    fn remove_style_property(&mut self, name: &str);

    fn style_property(&self, name: &str) -> Option<String>;
}
