//! Shift orchestration: the session facade, the timeline kernel, and the
//! deterministic RNG plumbing shared by both.

use hmac::{Hmac, Mac};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sha2::Sha256;
use std::cell::{RefCell, RefMut};

pub mod event;
pub(crate) mod kernel;
pub mod session;

pub use event::{CueBuffer, CueEvent, CueKind, CueSeverity};
pub use session::ShiftSession;

/// Deterministic bundle of RNG streams segregated by simulation domain.
///
/// Segregation keeps one domain's draw count from perturbing another, so a
/// test can pin the movement stream while the ambient stream runs free.
#[derive(Debug, Clone)]
pub struct RngBundle {
    movement: RefCell<CountingRng<SmallRng>>,
    hunt: RefCell<CountingRng<SmallRng>>,
    trap: RefCell<CountingRng<SmallRng>>,
    ambient: RefCell<CountingRng<SmallRng>>,
}

impl RngBundle {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        Self {
            movement: RefCell::new(CountingRng::new(derive_stream_seed(seed, b"movement"))),
            hunt: RefCell::new(CountingRng::new(derive_stream_seed(seed, b"hunt"))),
            trap: RefCell::new(CountingRng::new(derive_stream_seed(seed, b"trap"))),
            ambient: RefCell::new(CountingRng::new(derive_stream_seed(seed, b"ambient"))),
        }
    }

    /// Access the movement RNG stream.
    #[must_use]
    pub fn movement(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.movement.borrow_mut()
    }

    /// Access the hunting-mode RNG stream.
    #[must_use]
    pub fn hunt(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.hunt.borrow_mut()
    }

    /// Access the trap-event RNG stream.
    #[must_use]
    pub fn trap(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.trap.borrow_mut()
    }

    /// Access the ambient-cue RNG stream.
    #[must_use]
    pub fn ambient(&self) -> RefMut<'_, CountingRng<SmallRng>> {
        self.ambient.borrow_mut()
    }

    /// Total draws across every stream; useful as a mutation spy.
    #[must_use]
    pub fn total_draws(&self) -> u64 {
        self.movement.borrow().draws()
            + self.hunt.borrow().draws()
            + self.trap.borrow().draws()
            + self.ambient.borrow().draws()
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<SmallRng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: rand::RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac = Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes())
        .expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let seed_bytes: [u8; 8] = digest[..8].try_into().expect("digest slice length");
    u64::from_le_bytes(seed_bytes)
}
