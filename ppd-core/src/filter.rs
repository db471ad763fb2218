use crate::dataset::Dataset;
use crate::record::CountryRecord;
use std::collections::HashSet;

/// Return every record whose `country` is in `selected`, in dataset order.
///
/// The order and duplicates of `selected` do not matter. Records duplicated
/// in the dataset are returned as many times as they appear there.
pub fn filter_countries<'a, S: AsRef<str>>(
    dataset: &'a Dataset,
    selected: &[S],
) -> Vec<&'a CountryRecord> {
    let wanted: HashSet<&str> = selected.iter().map(|s| s.as_ref()).collect();
    dataset
        .records()
        .iter()
        .filter(|r| wanted.contains(r.country()))
        .collect()
}
