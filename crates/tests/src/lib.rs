

#[cfg(test)]
mod access_check_tests;

#[cfg(test)]
mod access_guard_tests;

#[cfg(test)]
mod health_tests;
