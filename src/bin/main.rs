use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anstream::eprintln;
use anstream::println;
use clap::Parser;
use clap::Subcommand;
use indoc::indoc;
use owo_colors::OwoColorize;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use textbook::algorithms::binary_search::binary_search;
use textbook::algorithms::dijkstra::dijkstra;
use textbook::algorithms::dijkstra::dijkstra_with_heap;
use textbook::algorithms::fibonacci::fibonacci;
use textbook::algorithms::merge_sort::merge_sort;
use textbook::graph::Graph;
use textbook::graph::Node;
use textbook::weight::Weight;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(long_version = textbook::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sorts the given integers with merge sort.
    Sort {
        #[arg(required = true)]
        items: Vec<i64>,
    },

    /// Looks up a target in a sorted list of integers.
    Search {
        target: i64,

        #[arg(required = true)]
        items: Vec<i64>,
    },

    /// Computes shortest distances from a source node.
    Dijkstra {
        /// Graph file in the line-oriented `FROM TO WEIGHT` format.
        #[arg(short, long, env = "GRAPH", conflicts_with = "random")]
        graph: Option<PathBuf>,

        /// Source node for `--graph` runs.
        #[arg(short, long, default_value_t = 'A')]
        source: char,

        /// Generate a random graph with this many nodes instead of loading
        /// one. The source is node 0.
        #[arg(long)]
        random: Option<u16>,

        #[arg(long, default_value_t = 0u64)]
        seed: u64,
        #[arg(long, default_value_t = 4u16)]
        out_degree: u16,
        #[arg(long, default_value_t = 100u64)]
        max_weight: u64,

        /// Use the priority-queue variant.
        #[arg(long)]
        heap: bool,

        #[arg(short, long, env = "LOGS_DIJKSTRA", default_value = "logs/dijkstra.org")]
        output: PathBuf,
    },

    /// Prints the n-th Fibonacci number.
    Fib { n: u32 },

    /// Runs every algorithm once on its classic example.
    Demo,
}

fn solve<N, W>(
    out: &mut impl Write,
    graph: &Graph<N, W>,
    source: N,
    heap: bool,
) -> std::io::Result<()>
where
    N: Node + Ord,
    W: Weight,
{
    writeln!(out, "#+begin_quote\n{graph}#+end_quote")?;

    let run = if heap {
        dijkstra_with_heap(graph, source)
    } else {
        dijkstra(graph, source)
    };
    let distances = match run {
        Ok(distances) => distances,
        Err(e) => {
            eprintln!("{}: {e}", "error".red());
            // Keep the sections already written; exit skips the drop flush.
            out.flush()?;
            std::process::exit(2);
        }
    };

    writeln!(out, "*** Distances from {source:?}")?;
    writeln!(out, "#+begin_example\n{distances}#+end_example")?;

    let reachable = distances.iter().filter(|(_, d)| d.finite()).count();
    println!(
        "{} of {} nodes reachable from {:?}",
        reachable.green(),
        distances.len(),
        source,
    );

    Ok(())
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    args.color.write_global();

    match args.command {
        Command::Sort { items } => {
            println!("{:?}", merge_sort(&items));
        }

        Command::Search { target, items } => {
            if !items.is_sorted() {
                eprintln!("{}: the input must be sorted ascending", "error".red());
                std::process::exit(2);
            }
            match binary_search(&items, &target) {
                Some(i) => println!("{target} found at index {}", i.green()),
                None => println!("{target} {}", "not found".red()),
            }
        }

        Command::Dijkstra {
            graph,
            source,
            random,
            seed,
            out_degree,
            max_weight,
            heap,
            output,
        } => {
            println!("Logging to {:?}", output.yellow());
            if let Some(dir) = output.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let file = File::create(&output)?;
            let mut out = BufWriter::new(file);
            writeln!(out, "* Runs")?;

            match (graph, random) {
                (Some(path), _) => {
                    let g = match Graph::try_from(path.as_path()) {
                        Ok(g) => g,
                        Err(e) => {
                            eprintln!("{}: {e}", "error".red());
                            out.flush()?;
                            std::process::exit(2);
                        }
                    };
                    writeln!(out, "** Graph {path:?} {g:?}")?;
                    solve(&mut out, &g, source, heap)?;
                }
                (None, Some(num_nodes)) => {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    let g = Graph::random(&mut rng, num_nodes, out_degree, max_weight);
                    writeln!(out, "** Random graph (seed {seed}) {g:?}")?;
                    solve(&mut out, &g, 0u32, heap)?;
                }
                (None, None) => {
                    eprintln!("{}: pass --graph FILE or --random NUM_NODES", "error".red());
                    out.flush()?;
                    std::process::exit(2);
                }
            }
        }

        Command::Fib { n } => match fibonacci(n) {
            Ok(value) => println!("fib({n}) = {}", value.green()),
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                std::process::exit(2);
            }
        },

        Command::Demo => {
            let items = vec![38, 27, 43, 3, 9, 82, 10];
            println!("merge_sort({items:?}) = {:?}", merge_sort(&items));

            let sorted = [1, 3, 5, 7, 9];
            println!(
                "binary_search({sorted:?}, 7) = {:?}",
                binary_search(&sorted, &7)
            );
            println!(
                "binary_search({sorted:?}, 4) = {:?}",
                binary_search(&sorted, &4)
            );

            let diamond = indoc! {"
                # The diamond: two routes from A to D.
                A B 1
                A C 4
                B C 2
                B D 5
                C D 1
            "};
            let g = Graph::try_from(diamond).unwrap();
            let distances = dijkstra(&g, 'A').unwrap();
            println!("dijkstra(diamond, 'A'):\n{distances}");

            println!("fib(10) = {}", fibonacci(10).unwrap());
        }
    }

    Ok(())
}
