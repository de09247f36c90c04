//! Regenerate-on-change contract between the UI level and the GPU buffers.

use crate::generator::{GasketBuffer, GasketGenerator};
use crate::SubdivisionLevel;

/// Mesh source driven by [`RenderSession`].
///
/// Implemented by [`GasketGenerator`]; tests substitute call-counting stubs.
pub trait GenerateMesh {
    fn generate(&mut self, level: SubdivisionLevel) -> GasketBuffer;
}

impl GenerateMesh for GasketGenerator {
    fn generate(&mut self, level: SubdivisionLevel) -> GasketBuffer {
        GasketGenerator::generate(self, level)
    }
}

/// Upload target for freshly generated buffers.
///
/// `upload` replaces whatever geometry is resident; an error is fatal to the
/// session (rendering cannot proceed without resident geometry, so callers
/// are expected to tear down rather than retry).
pub trait MeshSink {
    type Error;

    fn upload(&mut self, buffer: &GasketBuffer) -> Result<(), Self::Error>;
}

/// Owns the committed subdivision level and decides, once per frame, whether
/// regeneration is needed.
///
/// The contract: at most one `generate` per detected level change, never one
/// from the mere passage of frames. Drawing happens unconditionally outside
/// this type, using whatever the sink last accepted.
#[derive(Debug)]
pub struct RenderSession<G = GasketGenerator> {
    generator: G,
    /// Level currently reflected in the sink; `None` until the first upload
    /// succeeds, which forces generation on the first tick.
    committed: Option<SubdivisionLevel>,
    level_changed: bool,
}

impl<G: GenerateMesh> RenderSession<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            committed: None,
            level_changed: false,
        }
    }

    /// Level the sink currently holds, if any upload has completed.
    pub fn committed_level(&self) -> Option<SubdivisionLevel> {
        self.committed
    }

    /// Per-frame step: compare `selected` against the committed level and
    /// regenerate + upload on mismatch.
    ///
    /// Returns `Ok(true)` when a regeneration happened this tick. On upload
    /// failure the level stays uncommitted and the error propagates.
    pub fn tick<S: MeshSink>(
        &mut self,
        selected: SubdivisionLevel,
        sink: &mut S,
    ) -> Result<bool, S::Error> {
        if self.committed != Some(selected) {
            self.level_changed = true;
        }
        if !self.level_changed {
            return Ok(false);
        }

        let buffer = self.generator.generate(selected);
        sink.upload(&buffer)?;

        log::info!(
            "subdivision level {selected} committed ({} vertices)",
            buffer.vertex_count()
        );
        self.committed = Some(selected);
        self.level_changed = false;
        Ok(true)
    }
}

impl Default for RenderSession<GasketGenerator> {
    fn default() -> Self {
        Self::new(GasketGenerator::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::vertex_count_for;

    /// Delegates to the real generator while recording every call.
    struct CountingGenerator {
        inner: GasketGenerator,
        calls: Vec<SubdivisionLevel>,
    }

    impl CountingGenerator {
        fn new() -> Self {
            Self {
                inner: GasketGenerator::new(),
                calls: Vec::new(),
            }
        }
    }

    impl GenerateMesh for CountingGenerator {
        fn generate(&mut self, level: SubdivisionLevel) -> GasketBuffer {
            self.calls.push(level);
            self.inner.generate(level)
        }
    }

    /// Records the vertex count of every upload.
    #[derive(Default)]
    struct RecordingSink {
        uploads: Vec<usize>,
    }

    impl MeshSink for RecordingSink {
        type Error = std::convert::Infallible;

        fn upload(&mut self, buffer: &GasketBuffer) -> Result<(), Self::Error> {
            self.uploads.push(buffer.vertex_count());
            Ok(())
        }
    }

    struct FailingSink;

    impl MeshSink for FailingSink {
        type Error = &'static str;

        fn upload(&mut self, _: &GasketBuffer) -> Result<(), Self::Error> {
            Err("out of device memory")
        }
    }

    #[test]
    fn first_tick_generates_the_initial_level() {
        let mut session = RenderSession::new(CountingGenerator::new());
        let mut sink = RecordingSink::default();

        assert_eq!(session.tick(0, &mut sink), Ok(true));
        assert_eq!(session.committed_level(), Some(0));
        assert_eq!(sink.uploads, vec![12]);
    }

    #[test]
    fn unchanged_level_does_not_regenerate() {
        let mut session = RenderSession::new(CountingGenerator::new());
        let mut sink = RecordingSink::default();

        session.tick(0, &mut sink).unwrap();
        assert_eq!(session.tick(0, &mut sink), Ok(false));
        assert_eq!(session.tick(0, &mut sink), Ok(false));

        assert_eq!(session.generator.calls, vec![0]);
        assert_eq!(sink.uploads.len(), 1);
    }

    #[test]
    fn level_change_regenerates_exactly_once() {
        let mut session = RenderSession::new(CountingGenerator::new());
        let mut sink = RecordingSink::default();

        session.tick(1, &mut sink).unwrap();
        assert_eq!(session.tick(2, &mut sink), Ok(true));

        assert_eq!(session.generator.calls, vec![1, 2]);
        assert_eq!(session.committed_level(), Some(2));
    }

    #[test]
    fn select_then_reselect_scenario() {
        // Start at level 0, pick level 2 from the menu, pick level 2 again.
        let mut session = RenderSession::new(CountingGenerator::new());
        let mut sink = RecordingSink::default();

        session.tick(0, &mut sink).unwrap();
        session.tick(2, &mut sink).unwrap();
        session.tick(2, &mut sink).unwrap();

        assert_eq!(sink.uploads, vec![12, vertex_count_for(2)]);
        assert_eq!(session.generator.calls, vec![0, 2]);
    }

    #[test]
    fn failed_upload_leaves_level_uncommitted() {
        let mut session = RenderSession::new(CountingGenerator::new());

        assert_eq!(session.tick(1, &mut FailingSink), Err("out of device memory"));
        assert_eq!(session.committed_level(), None);

        // A working sink afterwards picks the level up again.
        let mut sink = RecordingSink::default();
        assert_eq!(session.tick(1, &mut sink), Ok(true));
        assert_eq!(session.committed_level(), Some(1));
    }
}
