/// Min/max of one bucket of samples. A bucket with no samples carries the
/// inverted sentinel `min = 1.0, max = -1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Peak {
    pub min: f32,
    pub max: f32,
}

impl Peak {
    const EMPTY: Peak = Peak {
        min: 1.0,
        max: -1.0,
    };

    pub fn has_data(&self) -> bool {
        self.min <= self.max
    }
}

/// Collapse `samples` into exactly `width` buckets of `ceil(len / width)`
/// samples each. Trailing buckets past the end of the input are empty.
pub fn reduce_waveform(samples: &[f32], width: usize) -> Vec<Peak> {
    if width == 0 {
        return Vec::new();
    }

    let step = samples.len().div_ceil(width);
    if step == 0 {
        return vec![Peak::EMPTY; width];
    }

    let mut peaks: Vec<Peak> = samples
        .chunks(step)
        .map(|bucket| {
            bucket.iter().fold(Peak::EMPTY, |peak, &s| Peak {
                min: peak.min.min(s),
                max: peak.max.max(s),
            })
        })
        .collect();
    peaks.resize(width, Peak::EMPTY);
    peaks
}
