//! Host Boundary (Driven Port)
//!
//! The two calls a guest makes into its host before control leaves the
//! guest. Neither returns anything the guest could act on.

use zg_01_digest::Digest;

use crate::domain::ExitCode;

/// Host/prover boundary.
///
/// Implementations are invoked by [`crate::GuestFinalizer`], which makes each
/// call at most once per invocation and never concurrently.
pub trait HostBoundary {
    /// Publish the journal bytes.
    fn write_output(&mut self, bytes: &[u8]);

    /// Terminate the invocation with the final claim digest.
    fn finalize(&mut self, exit_code: ExitCode, claim: &Digest);
}

impl<H: HostBoundary + ?Sized> HostBoundary for &mut H {
    fn write_output(&mut self, bytes: &[u8]) {
        (**self).write_output(bytes)
    }

    fn finalize(&mut self, exit_code: ExitCode, claim: &Digest) {
        (**self).finalize(exit_code, claim)
    }
}
