// file: src/provision/mod.rs
// description: repository provisioning module exports
// reference: internal module structure

pub mod provisioner;

pub use provisioner::RepoProvisioner;
