#[cfg(test)]
mod common;

#[cfg(test)]
mod meta_tests;

#[cfg(test)]
mod absence_create_tests;

#[cfg(test)]
mod absence_list_tests;

#[cfg(test)]
mod absence_delete_tests;

#[cfg(test)]
mod stats_tests;

#[cfg(test)]
mod export_tests;
