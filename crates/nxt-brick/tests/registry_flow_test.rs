//! End-to-end tests for attaching, looking up and detaching port handlers.

mod common;

use common::{Counted, Motor, SET_OUTPUT_STATE, TouchSensor, counting_factory, mock_brick};
use nxt_brick::{NxtBrick, RESERVED_IDENTIFIERS};
use nxt_core::{Error, Port};
use nxt_interface::{InterfaceError, InterfaceKind, MockInterface};
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_attach_lookup_detach_scenario() {
    let mut brick = mock_brick();

    brick.attach::<TouchSensor>("a", "touch").unwrap();
    let touch = brick.handler::<TouchSensor>("touch").unwrap();
    assert_eq!(touch.port, 0x00);

    let second = brick.attach::<TouchSensor>("a", "touch2");
    assert_eq!(second, Err(Error::PortTaken { port: Port::A }));

    assert!(brick.detach("touch").unwrap());
    assert!(!brick.detach("touch").unwrap());
}

#[test]
fn test_detach_leaves_port_taken() {
    let mut brick = mock_brick();
    brick.attach::<TouchSensor>("one", "touch").unwrap();
    assert!(brick.detach("touch").unwrap());

    assert!(brick.handler::<TouchSensor>("touch").is_none());
    assert!(brick.port_handler::<TouchSensor>(Port::One).is_some());
    assert_eq!(
        brick.attach::<TouchSensor>("one", "touch"),
        Err(Error::PortTaken { port: Port::One })
    );
}

#[test]
fn test_detached_identifier_can_name_another_port() {
    let mut brick = mock_brick();
    brick.attach::<TouchSensor>("one", "touch").unwrap();
    brick.detach("touch").unwrap();

    brick.attach::<TouchSensor>("two", "touch").unwrap();
    assert_eq!(brick.handler::<TouchSensor>("touch").unwrap().port, 0x01);
}

#[rstest]
#[case("a", 0x00)]
#[case("b", 0x01)]
#[case("c", 0x02)]
#[case("one", 0x00)]
#[case("two", 0x01)]
#[case("three", 0x02)]
#[case("four", 0x03)]
fn test_handler_built_with_port_byte(#[case] port: &str, #[case] expected: u8) {
    let mut brick = mock_brick();
    let counter = Cell::new(0);

    brick
        .attach_with(port, "device", counting_factory(&counter))
        .unwrap();

    let device = brick.handler::<Counted>("device").unwrap();
    assert_eq!(device.port, expected);
    assert_eq!(device.serial, 1);
    assert_eq!(counter.get(), 1);
}

#[test]
fn test_lookup_returns_instance_factory_built() {
    let mut brick = mock_brick();
    let counter = Cell::new(0);

    brick.attach_with("b", "first", counting_factory(&counter)).unwrap();
    brick.attach_with("c", "second", counting_factory(&counter)).unwrap();

    assert_eq!(brick.handler::<Counted>("first").unwrap().serial, 1);
    assert_eq!(brick.handler::<Counted>("second").unwrap().serial, 2);
}

#[test]
fn test_handler_shares_brick_interface() {
    let mut brick = mock_brick();
    brick.attach::<Motor>("b", "drive").unwrap();

    let drive = brick.handler::<Motor>("drive").unwrap();
    assert!(Rc::ptr_eq(&drive.interface, brick.interface()));
}

#[test]
fn test_port_taken_for_any_handler_type() {
    let mut brick = mock_brick();
    let counter = Cell::new(0);
    brick.attach::<Motor>("c", "claw").unwrap();

    assert_eq!(
        brick.attach::<TouchSensor>("c", "bumper"),
        Err(Error::PortTaken { port: Port::C })
    );
    assert_eq!(
        brick.attach_with("c", "other", counting_factory(&counter)),
        Err(Error::PortTaken { port: Port::C })
    );

    assert_eq!(counter.get(), 0);
    assert!(brick.handler::<Motor>("claw").is_some());
    assert_eq!(brick.port_identifiers().len(), 1);
}

#[test]
fn test_reserved_identifiers_never_build_handler() {
    let mut brick = mock_brick();
    let counter = Cell::new(0);

    for name in RESERVED_IDENTIFIERS {
        let result = brick.attach_with("a", *name, counting_factory(&counter));
        assert_eq!(
            result,
            Err(Error::InvalidIdentifier {
                identifier: name.to_string()
            }),
            "identifier {name} was accepted"
        );
    }

    assert_eq!(counter.get(), 0);
    assert!(brick.attached_ports().is_empty());
    assert!(brick.port_identifiers().is_empty());
}

#[rstest]
#[case("connect")]
#[case("left")]
#[case("right")]
fn test_occupied_port_reported_regardless_of_identifier(#[case] identifier: &str) {
    let mut brick = mock_brick();
    let counter = Cell::new(0);
    brick.attach::<Motor>("a", "left").unwrap();

    assert_eq!(
        brick.attach_with("a", identifier, counting_factory(&counter)),
        Err(Error::PortTaken { port: Port::A })
    );
    assert_eq!(counter.get(), 0);
    assert_eq!(brick.port_identifiers().len(), 1);
}

#[test]
fn test_reattach_same_identifier_same_port() {
    let mut brick = mock_brick();
    brick.attach::<TouchSensor>("a", "touch").unwrap();

    assert_eq!(
        brick.attach::<TouchSensor>("a", "touch"),
        Err(Error::PortTaken { port: Port::A })
    );
    assert_eq!(brick.handler::<TouchSensor>("touch").unwrap().port, 0x00);
}

#[test]
fn test_identifier_in_use_on_free_port() {
    let mut brick = mock_brick();
    brick.attach::<Motor>("a", "left").unwrap();

    assert_eq!(
        brick.attach::<Motor>("b", "left"),
        Err(Error::InvalidIdentifier {
            identifier: "left".to_string()
        })
    );
    assert!(!brick.is_port_taken(Port::B));
}

#[test]
fn test_all_port_rejected_by_attach() {
    let mut brick = mock_brick();
    let counter = Cell::new(0);

    let result = brick.attach_with(Port::All, "everything", counting_factory(&counter));
    assert_eq!(
        result,
        Err(Error::InvalidPort {
            port: "all".to_string()
        })
    );
    assert_eq!(counter.get(), 0);
}

#[test]
fn test_failed_attach_leaves_registry_unchanged() {
    let mut brick = mock_brick();
    brick.attach::<Motor>("a", "left").unwrap();

    let _ = brick.attach::<Motor>("invalid_port", "right");
    let _ = brick.attach::<Motor>("b", "9lives");
    let _ = brick.attach::<Motor>("b", "left");
    let _ = brick.attach::<Motor>("a", "right");

    assert_eq!(brick.attached_ports(), vec![Port::A]);
    assert_eq!(brick.port_identifiers().len(), 1);
    assert_eq!(brick.port_identifiers().get("left"), Some(&Port::A));
}

#[test]
fn test_fill_every_port() {
    let mut brick = mock_brick();
    for (index, port) in Port::ATTACHABLE.into_iter().enumerate() {
        brick.attach::<TouchSensor>(port, format!("device_{index}")).unwrap();
    }

    assert_eq!(brick.attached_ports(), Port::ATTACHABLE.to_vec());
    assert_eq!(brick.port_identifiers().len(), 7);
}

#[test]
fn test_unknown_interface_kind() {
    let error = NxtBrick::new("foobar").unwrap_err();
    assert_eq!(error.to_string(), "Unknown interface type: foobar");
}

#[rstest]
#[case("usb", InterfaceKind::Usb)]
#[case("serial", InterfaceKind::Serial)]
#[case("bluetooth", InterfaceKind::Serial)]
#[case("mock", InterfaceKind::Mock)]
fn test_known_interface_kinds(#[case] name: &str, #[case] expected: InterfaceKind) {
    use nxt_interface::Interface;

    let brick = NxtBrick::new(name).unwrap();
    assert_eq!(brick.interface().borrow().kind(), expected);
    assert!(!brick.interface().borrow().is_connected());
}

#[test]
fn test_connect_and_disconnect_delegate_once() {
    let mut brick = mock_brick();

    brick.connect().unwrap();
    {
        let interface = brick.interface().borrow();
        let mock = interface.as_mock().unwrap();
        assert_eq!(mock.connect_calls(), 1);
        assert_eq!(mock.disconnect_calls(), 0);
        assert!(mock.written().is_empty());
    }

    brick.disconnect().unwrap();
    let interface = brick.interface().borrow();
    let mock = interface.as_mock().unwrap();
    assert_eq!(mock.connect_calls(), 1);
    assert_eq!(mock.disconnect_calls(), 1);
    assert!(mock.written().is_empty());
}

#[test]
fn test_interface_errors_propagate() {
    let mut brick = NxtBrick::with_config(&nxt_interface::InterfaceConfig {
        kind: InterfaceKind::Serial,
        serial: nxt_interface::SerialConfig::with_path("/dev/nonexistent_port_12345"),
        ..Default::default()
    });

    assert!(brick.connect().is_err());
}

#[test]
fn test_handlers_write_through_shared_interface() {
    let mut brick = mock_brick();
    brick.attach::<Motor>("b", "left").unwrap();
    brick.attach::<Motor>("c", "right").unwrap();

    assert!(matches!(
        brick.handler::<Motor>("left").unwrap().run(75),
        Err(InterfaceError::NotConnected { .. })
    ));

    brick.connect().unwrap();
    brick.handler::<Motor>("left").unwrap().run(75).unwrap();
    brick.handler::<Motor>("right").unwrap().run(-75).unwrap();

    let interface = brick.interface().borrow();
    assert_eq!(
        interface.as_mock().unwrap().written(),
        &[
            vec![0x80, SET_OUTPUT_STATE, 0x01, 75],
            vec![0x80, SET_OUTPUT_STATE, 0x02, (-75i8) as u8],
        ]
    );
}

#[test]
fn test_setup_block_attaches_before_return() {
    let brick = NxtBrick::new_with_setup("mock", |brick| {
        brick.attach::<Motor>("a", "left")?;
        brick.attach::<TouchSensor>("one", "bumper")?;
        Ok(())
    })
    .unwrap();

    assert_eq!(brick.attached_ports(), vec![Port::A, Port::One]);
    assert!(brick.handler::<TouchSensor>("bumper").is_some());
}

#[test]
fn test_replaced_interface_receives_connect() {
    let mut brick = NxtBrick::new("usb").unwrap();
    brick.set_interface(MockInterface::new());
    brick.connect().unwrap();

    let interface = brick.interface().borrow();
    assert_eq!(interface.as_mock().unwrap().connect_calls(), 1);
}
