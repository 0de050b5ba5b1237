use crate::{Batch, Error, ResponseSet, Result, StatResult};

/// Population standard deviation, computed entirely in `f64`.
pub fn standard_deviation(values: &[i64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyData);
    }

    let n = values.len() as f64;
    let mean = values.iter().map(|&x| x as f64).sum::<f64>() / n;

    let m2: f64 = values
        .iter()
        .map(|&x| {
            let delta = x as f64 - mean;
            delta * delta
        })
        .sum();

    Ok((m2 / n).sqrt())
}

/// Build the response payload: one entry per batch in order, then one entry
/// over the concatenation of every batch. An empty batch fails the whole set.
pub fn aggregate(batches: &[Batch]) -> Result<ResponseSet> {
    let mut response = Vec::with_capacity(batches.len() + 1);
    let mut all_numbers = Vec::with_capacity(batches.iter().map(Vec::len).sum());

    for data in batches {
        let stddev = standard_deviation(data)?;
        all_numbers.extend_from_slice(data);
        response.push(StatResult {
            stddev,
            data: data.clone(),
        });
    }

    let stddev = standard_deviation(&all_numbers)?;
    response.push(StatResult {
        stddev,
        data: all_numbers,
    });

    Ok(response)
}
