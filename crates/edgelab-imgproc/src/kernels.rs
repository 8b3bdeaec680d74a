use crate::error::FilterError;

/// Side length of a square smoothing or median window.
///
/// A kernel size is always odd and at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KernelSize(u32);

impl KernelSize {
    /// Create a kernel size, rejecting even values.
    ///
    /// # Example
    ///
    /// ```
    /// use edgelab_imgproc::KernelSize;
    ///
    /// assert_eq!(KernelSize::new(5).unwrap().get(), 5);
    /// assert!(KernelSize::new(4).is_err());
    /// ```
    pub fn new(size: u32) -> Result<Self, FilterError> {
        if size % 2 == 0 {
            return Err(FilterError::InvalidKernelSize(size));
        }
        Ok(Self(size))
    }

    /// Create a kernel size from an operator supplied value.
    ///
    /// Even values are bumped to the next odd value; odd values are kept as they are. The
    /// largest even `u32` bumps to `u32::MAX`, so every value maps to a kernel size.
    ///
    /// # Example
    ///
    /// ```
    /// use edgelab_imgproc::KernelSize;
    ///
    /// assert_eq!(KernelSize::from_requested(4).get(), 5);
    /// assert_eq!(KernelSize::from_requested(5).get(), 5);
    /// assert_eq!(KernelSize::from_requested(0).get(), 1);
    /// assert_eq!(KernelSize::from_requested(300).get(), 301);
    /// ```
    pub fn from_requested(requested: u32) -> Self {
        if requested % 2 == 0 {
            Self(requested + 1)
        } else {
            Self(requested)
        }
    }

    /// The side length of the window.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Number of pixels on each side of the center.
    pub fn radius(&self) -> u32 {
        self.0 / 2
    }

    /// Standard deviation used when a gaussian kernel is requested by size only.
    ///
    /// sigma = 0.3 * ((ksize - 1) * 0.5 - 1) + 0.8
    pub fn gaussian_sigma(&self) -> f32 {
        0.3 * ((self.0 as f32 - 1.0) * 0.5 - 1.0) + 0.8
    }
}

impl std::fmt::Display for KernelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// Hysteresis thresholds for the Canny edge detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CannyThresholds {
    /// Lower threshold, weak edges below it are discarded.
    pub lower: i32,
    /// Upper threshold, edges above it are always kept.
    pub upper: i32,
}

impl CannyThresholds {
    /// The thresholds as `(low, high)`, swapped if given in reverse order.
    pub fn ordered(&self) -> (f32, f32) {
        let (low, high) = if self.lower <= self.upper {
            (self.lower, self.upper)
        } else {
            (self.upper, self.lower)
        };
        (low as f32, high as f32)
    }
}

/// Create a gaussian blur kernel.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel.
/// * `sigma` - The sigma of the gaussian kernel.
///
/// # Returns
///
/// A normalized vector of the kernel.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size - 1) as f32 / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}
