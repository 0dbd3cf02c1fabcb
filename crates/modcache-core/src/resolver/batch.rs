use std::collections::HashMap;

/// Run `loader` once per distinct name and return one value per input name.
///
/// Output order and multiplicity follow `names`; duplicate names receive
/// clones of the value computed for their first occurrence.
pub fn load_with_local_cache<S, T, F>(names: &[S], containing_file: &str, mut loader: F) -> Vec<T>
where
    S: AsRef<str>,
    T: Clone,
    F: FnMut(&str, &str) -> T,
{
    if names.is_empty() {
        return Vec::new();
    }

    let mut local: HashMap<&str, T> = HashMap::with_capacity(names.len());
    let mut resolutions = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        let value = local
            .entry(name)
            .or_insert_with(|| loader(name, containing_file))
            .clone();
        resolutions.push(value);
    }

    resolutions
}
