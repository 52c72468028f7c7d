//! Uniform sampling of assets without replacement.
//!
//! [`SampleSelector`] turns a pool size and a sampling ratio into a set of
//! distinct pool indices. Randomness is injected by the caller so audits can
//! be replayed from a seed. The duplicate-rejecting draw loop is bounded by
//! [`SelectorConfig::max_draws`]; once exhausted the selector either fills the
//! remaining slots with a partial shuffle or reports
//! [`AuditError::SelectionStall`].

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{Asset, AuditError, MAX_SAMPLE};

/// Configuration for [`SampleSelector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Largest sample the planner accepts. Never above [`MAX_SAMPLE`].
    pub capacity: usize,
    /// Upper bound on rejection draws before giving up on the draw loop.
    pub max_draws: usize,
    /// Complete the sample with a partial shuffle once `max_draws` is spent.
    pub shuffle_fallback: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_SAMPLE,
            max_draws: 1024,
            shuffle_fallback: true,
        }
    }
}

/// Number of assets to inspect for a pool of `pool` assets at `ratio`.
///
/// The product is rounded half away from zero.
///
/// # Errors
/// Returns [`AuditError::InvalidRatio`] when `ratio` is NaN or outside
/// `[0.0, 1.0]`, [`AuditError::EmptyPool`] when `pool` is zero and
/// [`AuditError::EmptySample`] when the rounded size is zero.
///
/// # Examples
/// ```
/// use spotcheck_core::sample_size;
///
/// assert_eq!(sample_size(10, 0.3), Ok(3));
/// assert!(sample_size(10, 0.01).is_err());
/// ```
pub fn sample_size(pool: usize, ratio: f64) -> Result<usize, AuditError> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(AuditError::InvalidRatio { ratio });
    }
    if pool == 0 {
        return Err(AuditError::EmptyPool);
    }
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "ratio is validated to [0, 1] so the rounded product lies in 0..=pool"
    )]
    let size = (pool as f64 * ratio).round() as usize;
    if size == 0 {
        return Err(AuditError::EmptySample);
    }
    Ok(size)
}

/// Draws distinct indices from a pool.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use spotcheck_core::SampleSelector;
///
/// # fn main() -> Result<(), spotcheck_core::AuditError> {
/// let selector = SampleSelector::default();
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = selector.select_indices(10, 0.3, &mut rng)?;
/// assert_eq!(picked.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SampleSelector {
    config: SelectorConfig,
}

impl SampleSelector {
    /// Construct a selector with explicit configuration.
    ///
    /// A `capacity` above [`MAX_SAMPLE`] is clamped, as the distance matrix
    /// never accepts more than [`MAX_SAMPLE`] assets.
    #[must_use]
    pub fn new(mut config: SelectorConfig) -> Self {
        if config.capacity > MAX_SAMPLE {
            log::warn!(
                "selector capacity {} exceeds limit {MAX_SAMPLE}; clamping",
                config.capacity
            );
            config.capacity = MAX_SAMPLE;
        }
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Validated sample size, including the capacity check.
    ///
    /// # Errors
    /// Propagates [`sample_size`] failures and returns
    /// [`AuditError::CapacityExceeded`] when the size exceeds
    /// [`SelectorConfig::capacity`].
    pub fn sample_size(&self, pool: usize, ratio: f64) -> Result<usize, AuditError> {
        let size = sample_size(pool, ratio)?;
        if size > self.config.capacity {
            return Err(AuditError::CapacityExceeded {
                requested: size,
                capacity: self.config.capacity,
            });
        }
        Ok(size)
    }

    /// Draw `round(pool * ratio)` distinct indices in `0..pool`.
    ///
    /// Indices are returned in draw order.
    ///
    /// # Errors
    /// Propagates [`SampleSelector::sample_size`] failures and returns
    /// [`AuditError::SelectionStall`] when the draw budget runs out with the
    /// shuffle fallback disabled.
    pub fn select_indices<R>(
        &self,
        pool: usize,
        ratio: f64,
        rng: &mut R,
    ) -> Result<Vec<usize>, AuditError>
    where
        R: Rng + ?Sized,
    {
        let size = self.sample_size(pool, ratio)?;
        let mut chosen = Vec::with_capacity(size);
        let mut used = vec![false; pool];
        let mut attempts = 0_usize;

        while chosen.len() < size {
            if attempts >= self.config.max_draws {
                if !self.config.shuffle_fallback {
                    return Err(AuditError::SelectionStall { attempts });
                }
                log::warn!(
                    "draw budget of {attempts} spent with {} of {size} assets chosen; completing by shuffle",
                    chosen.len()
                );
                fill_by_shuffle(&used, &mut chosen, size, rng);
                break;
            }
            attempts += 1;
            let candidate = rng.gen_range(0..pool);
            if let Some(slot) = used.get_mut(candidate)
                && !*slot
            {
                *slot = true;
                chosen.push(candidate);
            }
        }

        log::debug!("selected {size} of {pool} assets after {attempts} draws");
        Ok(chosen)
    }

    /// Draw a [`SampleSet`] from `assets`.
    ///
    /// # Errors
    /// See [`SampleSelector::select_indices`].
    pub fn select<R>(
        &self,
        assets: &[Asset],
        ratio: f64,
        rng: &mut R,
    ) -> Result<SampleSet, AuditError>
    where
        R: Rng + ?Sized,
    {
        let indices = self.select_indices(assets.len(), ratio, rng)?;
        let picked = indices
            .iter()
            .filter_map(|&idx| assets.get(idx).cloned())
            .collect();
        Ok(SampleSet {
            assets: picked,
            pool_indices: indices,
        })
    }
}

fn fill_by_shuffle<R>(used: &[bool], chosen: &mut Vec<usize>, size: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let mut remaining: Vec<usize> = used
        .iter()
        .enumerate()
        .filter(|(_, taken)| !**taken)
        .map(|(idx, _)| idx)
        .collect();
    let needed = size.saturating_sub(chosen.len());
    let (picked, _) = remaining.partial_shuffle(rng, needed);
    chosen.extend_from_slice(picked);
}

/// Assets chosen for one audit run, in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet {
    assets: Vec<Asset>,
    pool_indices: Vec<usize>,
}

impl SampleSet {
    /// Treat `assets` as an already-drawn sample.
    ///
    /// Pool indices are the positions within `assets`.
    #[must_use]
    pub fn from_assets(assets: Vec<Asset>) -> Self {
        let pool_indices = (0..assets.len()).collect();
        Self {
            assets,
            pool_indices,
        }
    }

    /// Sampled assets.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Index of each sampled asset within the original pool.
    #[must_use]
    pub fn pool_indices(&self) -> &[usize] {
        &self.pool_indices
    }

    /// Number of sampled assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the sample is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Name of the asset at `vertex`, if present.
    #[must_use]
    pub fn name(&self, vertex: usize) -> Option<&str> {
        self.assets.get(vertex).map(|asset| asset.name.as_str())
    }
}
