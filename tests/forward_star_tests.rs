use path_engine::graph::{AllowedUses, ForwardStar, LinkSpec, NetworkView};
use path_engine::Error;

fn scenario_links() -> Vec<LinkSpec<f64>> {
    vec![
        LinkSpec::new(0, 1, 1.0),
        LinkSpec::new(0, 2, 4.0),
        LinkSpec::new(1, 2, 1.0),
        LinkSpec::new(1, 3, 5.0),
        LinkSpec::new(2, 3, 1.0),
    ]
}

#[test]
fn test_from_links_builds_contiguous_ranges() {
    let network = ForwardStar::from_links(4, scenario_links()).unwrap();

    assert_eq!(network.node_count(), 4);
    assert_eq!(network.link_count(), 5);
    assert_eq!(network.outgoing_links(0), &[0, 1]);
    assert_eq!(network.outgoing_links(1), &[2, 3]);
    assert_eq!(network.outgoing_links(2), &[4]);
    assert!(network.outgoing_links(3).is_empty());
    assert_eq!(network.first_link_from(), &[0, 2, 4, 5]);
    assert_eq!(network.last_link_from(), &[2, 4, 5, 5]);

    for link in 0..network.link_count() {
        assert!(network.outgoing_links(network.from_node(link)).contains(&link));
    }
}

#[test]
fn test_from_links_keeps_input_order_within_node() {
    let links = vec![
        LinkSpec::new(1, 0, 2.0),
        LinkSpec::new(0, 2, 1.0),
        LinkSpec::new(1, 2, 3.0),
        LinkSpec::new(0, 1, 1.0),
    ];
    let network = ForwardStar::from_links(3, links).unwrap();
    assert_eq!(network.outgoing_links(0), &[1, 3]);
    assert_eq!(network.outgoing_links(1), &[0, 2]);
    assert_eq!(network.to_node(3), 1);
    assert_eq!(network.cost(2), 3.0);
}

#[test]
fn test_from_links_rejects_bad_input() {
    let out_of_range = vec![LinkSpec::new(0, 7, 1.0)];
    assert!(matches!(
        ForwardStar::from_links(3, out_of_range),
        Err(Error::InvalidLink { link: 0, from: 0, to: 7 })
    ));

    let negative = vec![LinkSpec::new(0, 1, 1.0), LinkSpec::new(1, 0, -2.0)];
    assert!(matches!(ForwardStar::from_links(2, negative), Err(Error::InvalidCost(1))));

    let nan = vec![LinkSpec::new(0, 1, f64::NAN)];
    assert!(matches!(ForwardStar::from_links(2, nan), Err(Error::InvalidCost(0))));
}

#[test]
fn test_from_parts_accepts_valid_partition() {
    // Node 1's links listed in reverse order to show the caller's order is kept
    let network = ForwardStar::from_parts(
        3,
        vec![0, 1, 3],
        vec![1, 3, 3],
        vec![0, 2, 1],
        vec![0, 1, 1],
        vec![1, 2, 0],
        vec![1.0, 2.0, 3.0],
        vec![AllowedUses::all(), AllowedUses::from_tokens("bike"), AllowedUses::all()],
    )
    .unwrap();

    assert_eq!(network.outgoing_links(1), &[2, 1]);
    assert!(network.allowed_uses(1).contains("bike"));
}

#[test]
fn test_from_parts_rejects_malformed_partition() {
    let uses = || vec![AllowedUses::all(); 2];

    // Link 1 listed twice, link 0 never
    let duplicate = ForwardStar::from_parts(2, vec![0, 2], vec![2, 2], vec![1, 1], vec![0, 0], vec![1, 1], vec![1.0, 1.0], uses());
    assert!(matches!(duplicate, Err(Error::MalformedForwardStar(_))));

    // Link 1 leaves node 1 but is listed under node 0
    let wrong_owner = ForwardStar::from_parts(2, vec![0, 2], vec![2, 2], vec![0, 1], vec![0, 1], vec![1, 0], vec![1.0, 1.0], uses());
    assert!(matches!(wrong_owner, Err(Error::MalformedForwardStar(_))));

    // Range past the end of the link order
    let overflow = ForwardStar::from_parts(2, vec![0, 1], vec![1, 3], vec![0, 1], vec![0, 1], vec![1, 0], vec![1.0, 1.0], uses());
    assert!(matches!(overflow, Err(Error::MalformedForwardStar(_))));

    // Link 1 never listed
    let gap = ForwardStar::from_parts(2, vec![0, 1], vec![1, 1], vec![0, 1], vec![0, 1], vec![1, 0], vec![1.0, 1.0], uses());
    assert!(matches!(gap, Err(Error::MalformedForwardStar(_))));
}

#[test]
fn test_set_costs() {
    let mut network = ForwardStar::from_links(4, scenario_links()).unwrap();
    network.set_costs(vec![2.0, 2.0, 2.0, 2.0, 2.0]).unwrap();
    assert_eq!(network.cost(3), 2.0);

    assert!(matches!(network.set_costs(vec![1.0]), Err(Error::MalformedForwardStar(_))));
    assert!(matches!(
        network.set_costs(vec![1.0, 1.0, -1.0, 1.0, 1.0]),
        Err(Error::InvalidCost(2))
    ));
    assert_eq!(network.cost(2), 2.0);
}
