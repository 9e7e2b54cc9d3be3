#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_login_tests;

#[cfg(test)]
mod especialidad_tests;

#[cfg(test)]
mod dentista_tests;

#[cfg(test)]
mod turno_create_tests;

#[cfg(test)]
mod turno_estado_tests;

#[cfg(test)]
mod error_mapping_tests;
