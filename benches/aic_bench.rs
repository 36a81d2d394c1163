// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use at91aic::core::aic::registers::{AIC_EOICR, AIC_IVR};
use at91aic::core::aic::{Aic, FetchKind, Polarity, Sensitivity, SourceMode};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn configured_aic(sources: u8) -> Aic {
    let mut aic = Aic::new();
    for source in 1..=sources {
        let mode = SourceMode::new(source % 8, Sensitivity::Edge, Polarity::Positive);
        aic.configure_source(source, mode).unwrap();
        aic.set_vector(source, 0x1000 + source as u32).unwrap();
        aic.enable_sources(1 << source);
    }
    aic
}

fn set_line_benchmark(c: &mut Criterion) {
    c.bench_function("set_line_toggle", |b| {
        let mut aic = configured_aic(31);
        b.iter(|| {
            aic.set_line(black_box(12), true);
            aic.set_line(black_box(12), false);
        });
    });
}

fn dispatch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for sources in [1u8, 8, 31] {
        group.bench_with_input(
            BenchmarkId::new("fetch_eoi", sources),
            &sources,
            |b, &sources| {
                let mut aic = configured_aic(sources);
                b.iter(|| {
                    aic.set_pending(u32::MAX << 1);
                    while aic.irq_line() {
                        black_box(aic.fetch_vector(FetchKind::Read));
                        aic.end_of_interrupt();
                    }
                });
            },
        );
    }

    group.bench_function("register_cycle", |b| {
        let mut aic = configured_aic(31);
        b.iter(|| {
            aic.set_line(20, true);
            black_box(aic.read(AIC_IVR));
            aic.write(AIC_EOICR, 0);
            aic.set_line(20, false);
        });
    });

    group.finish();
}

criterion_group!(benches, set_line_benchmark, dispatch_benchmark);
criterion_main!(benches);
