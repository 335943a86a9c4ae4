use std::fs;

fn read_fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{name}"))
        .unwrap_or_else(|_| panic!("failed to read fixture {name}"))
}

#[test]
fn simple_add_translates_without_bootstrap() {
    let source = read_fixture("SimpleAdd.vm");
    let asm = n2t_vmtranslator::translate_file(&source, "SimpleAdd").unwrap();
    assert!(!asm.contains("bootstrap"));
    assert!(asm.contains("// push constant 7\n"));
    assert!(asm.contains("// add\n"));
    assert!(asm.contains("M=D+M\n"));
}

#[test]
fn stack_test_comparison_labels_are_unique() {
    let source = read_fixture("StackTest.vm");
    let asm = n2t_vmtranslator::translate_file(&source, "StackTest").unwrap();
    assert!(asm.contains("CONTINUE1"));
    assert!(asm.contains("CONTINUE2"));
    assert!(asm.contains("CONTINUE3"));
    assert!(!asm.contains("CONTINUE4"));
}

#[test]
fn directory_mode_emits_bootstrap_first() {
    let main_src = read_fixture("Multi/Main.vm");
    let helper_src = read_fixture("Multi/Helper.vm");
    let files = vec![
        ("Helper".to_string(), helper_src),
        ("Main".to_string(), main_src),
    ];
    let asm = n2t_vmtranslator::translate_program(&files).unwrap();
    assert!(asm.starts_with("// bootstrap code\n"));
    assert!(asm.contains("@Bootstrap$ret\n"));
    assert!(asm.contains("(Helper.double)\n"));
    assert!(asm.contains("(Main.main)\n"));

    let bootstrap_pos = asm.find("// bootstrap code").unwrap();
    let helper_pos = asm.find("(Helper.double)").unwrap();
    let main_pos = asm.find("(Main.main)").unwrap();
    assert!(bootstrap_pos < helper_pos);
    assert!(helper_pos < main_pos);
}

#[test]
fn directory_mode_static_variables_use_per_file_stem() {
    let main_src = read_fixture("Multi/Main.vm");
    let helper_src = read_fixture("Multi/Helper.vm");
    let files = vec![
        ("Helper".to_string(), helper_src),
        ("Main".to_string(), main_src),
    ];
    let asm = n2t_vmtranslator::translate_program(&files).unwrap();
    assert!(asm.contains("@Main.0\n"));
}

#[test]
fn directory_mode_call_counter_is_program_wide() {
    let main_src = read_fixture("Multi/Main.vm");
    let helper_src = read_fixture("Multi/Helper.vm");
    let files = vec![
        ("Helper".to_string(), helper_src),
        ("Main".to_string(), main_src),
    ];
    let asm = n2t_vmtranslator::translate_program(&files).unwrap();
    assert!(asm.contains("@Main.main1\n"));
    assert!(asm.contains("(Main.main1)\n"));
}

#[test]
fn unknown_command_reports_an_error() {
    let errors = n2t_vmtranslator::translate_file("frobnicate\n", "Bad").unwrap_err();
    assert_eq!(errors.len(), 1);
}
