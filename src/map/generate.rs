use super::Map;

use crate::error::RouterError;
use crate::pattern::Pattern;

impl Map {
    /// Generates the path of the named route, percent-encoding values.
    ///
    /// Supplied attributes override the route's defaults. Every value must
    /// match its token regex.
    pub fn generate<I, K, V>(&self, name: &str, attributes: I) -> Result<String, RouterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.build(name, attributes, false)
    }

    /// Like [`generate`](Map::generate), but substitutes values verbatim.
    pub fn generate_raw<I, K, V>(&self, name: &str, attributes: I) -> Result<String, RouterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.build(name, attributes, true)
    }

    fn build<I, K, V>(&self, name: &str, attributes: I, raw: bool) -> Result<String, RouterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let route = self.get_route(name)?;

        let mut data = route.defaults().clone();
        for (k, v) in attributes {
            data.insert(k.as_ref(), v.as_ref().to_owned());
        }

        let compiled;
        let pattern = match route.pattern() {
            Some(p) => &**p,
            None => {
                compiled = Pattern::compile(route, &self.basepath)?;
                &compiled
            }
        };

        let path = pattern.generate(name, &data, raw)?;
        Ok(format!("{}{}", self.basepath, path))
    }
}
