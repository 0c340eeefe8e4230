use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use stl_containers::collections::heap::MinFirst;
use stl_containers::collections::{LinkedList, PriorityQueue, Queue, Stack};
use tracing::{debug, info, subscriber};
use tracing_subscriber::FmtSubscriber;

/// Read from the environment, e.g. `DEMO_HEAP_SIZE=16 DEMO_SEED=7 stl-demo`.
#[derive(Deserialize, Debug)]
struct DemoConfig {
    #[serde(default = "default_heap_size")]
    demo_heap_size: usize,
    demo_seed: Option<u64>,
}

const fn default_heap_size() -> usize {
    8
}

fn main() -> anyhow::Result<()> {
    let config = envy::from_env::<DemoConfig>()?;

    let subscriber = FmtSubscriber::new();
    subscriber::set_global_default(subscriber)?;

    debug!(?config, "loaded demo configuration");

    linked_list_demo()?;
    stack_demo()?;
    queue_demo()?;
    priority_queue_demo(&config)?;

    Ok(())
}

fn linked_list_demo() -> anyhow::Result<()> {
    info!("===== LinkedList =====");
    let mut list = LinkedList::from([10, 20, 30]);
    list.push_front(5);
    list.push_back(40);
    info!(%list, len = list.len(), "after pushing to both ends");
    let (front, back) = (list.front()?, list.back()?);
    info!(front, back);

    let popped = list.pop_front()?;
    info!(popped, %list, "after pop_front");
    Ok(())
}

fn stack_demo() -> anyhow::Result<()> {
    info!("===== Stack =====");
    let mut stack = Stack::from([1, 2, 3]);
    stack.push(4);
    let top = stack.top()?;
    info!(%stack, top);

    let popped = stack.pop()?;
    info!(popped, %stack, "after pop");
    Ok(())
}

fn queue_demo() -> anyhow::Result<()> {
    info!("===== Queue =====");
    let mut queue = Queue::from([1, 2, 3]);
    queue.push(4);
    let (front, back) = (queue.front()?, queue.back()?);
    info!(%queue, front, back);

    let popped = queue.pop()?;
    info!(popped, %queue, "after pop");
    Ok(())
}

fn priority_queue_demo(config: &DemoConfig) -> anyhow::Result<()> {
    info!("===== PriorityQueue =====");
    let mut rng = match config.demo_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let values = (0..config.demo_heap_size)
        .map(|_| rng.gen_range(0..100_u32))
        .collect::<Vec<_>>();
    info!(?values, "pushing values");

    let max_queue = values.iter().copied().collect::<PriorityQueue<_>>();
    let min_queue = PriorityQueue::from_iter_with(values.iter().copied(), MinFirst);
    // Heap storage order, not priority order.
    debug!(%max_queue, %min_queue, "heap storage");

    if let Ok(top) = max_queue.top() {
        info!(top, "highest priority");
    }

    let descending = max_queue.into_iter_sorted().collect::<Vec<_>>();
    let ascending = min_queue.into_iter_sorted().collect::<Vec<_>>();
    info!(?descending, "max-first pops");
    info!(?ascending, "min-first pops");
    Ok(())
}
