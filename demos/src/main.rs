// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::{fs, path::PathBuf, process, time::Instant};

use rand::thread_rng;
use starklite_demos::fibonacci::FibSq;
use structopt::StructOpt;
use tracing::{event, level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use prover::{math::BaseElement, Statement};

// PROOF GENERATOR
// ================================================================================================

#[derive(StructOpt, Debug)]
#[structopt(name = "starklite", about = "Starklite proof generator")]
struct Options {
    /// Number of square-Fibonacci steps to prove
    #[structopt(short = "n", long = "steps", default_value = "1022")]
    num_steps: usize,

    /// Path of the generated proof file
    #[structopt(short = "o", long = "output", default_value = "proof.txt")]
    output: PathBuf,
}

fn main() {
    // configure logging
    let format = tracing_subscriber::fmt::layer()
        .with_level(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .without_time()
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry().with(format).init();

    // read command-line args
    let options = Options::from_args();
    if options.num_steps < 2 {
        eprintln!("at least 2 steps are required, but {} were requested", options.num_steps);
        process::exit(1);
    }

    // draw a random witness; the proof reveals nothing about it beyond the public
    // output of the recurrence
    let secret = BaseElement::random(&mut thread_rng());
    let statement = FibSq::new(secret, options.num_steps);
    event!(
        Level::DEBUG,
        "proving {} steps of the square-fibonacci recurrence, public output {}",
        options.num_steps,
        statement.public_output()
    );

    let now = Instant::now();
    let proof = match prover::prove(&statement) {
        Ok(proof) => proof,
        Err(err) => {
            eprintln!("proof generation failed: {err}");
            process::exit(1);
        },
    };
    event!(
        Level::DEBUG,
        "proof generated in {} ms ({} entries)",
        now.elapsed().as_millis(),
        proof.len()
    );

    if let Err(err) = fs::write(&options.output, proof.to_string()) {
        eprintln!("failed to write {}: {err}", options.output.display());
        process::exit(1);
    }
    event!(Level::DEBUG, "proof written to {}", options.output.display());
}
