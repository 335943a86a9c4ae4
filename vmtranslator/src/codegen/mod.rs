//! Lowers [`VMCommand`]s into Hack assembly text.
//!
//! State that the original translator threaded through every function
//! call (the current function name, the comparison-label counter, the
//! call-site counter) lives here instead as fields of [`CodeGenerator`].
//! The two counters are deliberately distinct: `compare_counter` names
//! `eq`/`lt`/`gt`'s `CONTINUE<k>` labels, `call_counter` names `call`'s
//! return-address labels, and neither is reset when a new source file
//! starts in directory mode — see `translate_program`'s doc comment.


use crate::command::{ArithmeticOp, Segment, VMCommand};

/// Name of the enclosing `function` command's return-address label
/// scheme: `call`'s return label is `{enclosing_function}{call_counter}`
/// (direct concatenation, no separator) — distinct from `label`/`goto`/
/// `if-goto`, which scope as `{enclosing_function}${label}`.
pub struct CodeGenerator {
    /// Stack of `function` names seen so far; the top is the function
    /// whose body is currently being translated. Only ever pushed to —
    /// `return` does not pop it, matching the call site this was
    /// ported from, where the name is used purely for label scoping.
    function_stack: Vec<String>,
    compare_counter: u32,
    call_counter: u32,
    /// Stem of the current source file (before the first `.`), used to
    /// qualify `static` variable names.
    current_file_stem: String,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self {
            function_stack: Vec::new(),
            compare_counter: 1,
            call_counter: 1,
            current_file_stem: String::new(),
        }
    }

    pub fn set_current_file_stem(&mut self, stem: impl Into<String>) {
        self.current_file_stem = stem.into();
    }

    fn enclosing_function(&self) -> Option<&str> {
        self.function_stack.last().map(String::as_str)
    }

    /// The bootstrap prelude: `SP=256` followed by `call Sys.init 0`,
    /// with the return-address label forced to `Bootstrap$ret` rather
    /// than drawn from `call_counter`.
    pub fn bootstrap(&mut self) -> String {
        let mut out = String::from("// bootstrap code\n@256\nD=A\n@SP\nM=D\n");
        out.push_str(&self.translate_call_with_label("Sys.init", 0, "Bootstrap$ret"));
        out
    }

    pub fn translate(&mut self, command: &VMCommand) -> String {
        let mut out = format!("// {}\n", command.original_text());
        out.push_str(&self.translate_body(command));
        out
    }

    fn translate_body(&mut self, command: &VMCommand) -> String {
        match command {
            VMCommand::Push { segment, index } => self.translate_push(*segment, *index),
            VMCommand::Pop { segment, index } => self.translate_pop(*segment, *index),
            VMCommand::Arithmetic(op) => self.translate_arithmetic(*op),
            VMCommand::Label(name) => self.translate_label(name),
            VMCommand::Goto(name) => self.translate_goto(name),
            VMCommand::IfGoto(name) => self.translate_if_goto(name),
            VMCommand::Function { name, num_locals } => {
                self.function_stack.push(name.clone());
                self.translate_function(name, *num_locals)
            }
            VMCommand::Call { name, num_args } => self.translate_call(name, *num_args),
            VMCommand::Return => self.translate_return(),
        }
    }

    fn translate_push(&self, segment: Segment, index: u16) -> String {
        match segment {
            Segment::Constant => format!("@{index}\nD=A\n@SP\nA=M\nM=D\n@SP\nM=M+1\n"),
            Segment::Local | Segment::Argument | Segment::This | Segment::That => format!(
                "@{base}\nD=M\n@{index}\nA=A+D\nD=M\n@SP\nA=M\nM=D\n@SP\nM=M+1\n",
                base = segment_symbol(segment),
            ),
            Segment::Pointer => {
                let reg = if index == 0 { "THIS" } else { "THAT" };
                format!("@{reg}\nD=M\n@SP\nA=M\nM=D\n@SP\nM=M+1\n")
            }
            Segment::Temp => {
                let addr = 5 + index;
                format!("@{addr}\nD=M\n@SP\nA=M\nM=D\n@SP\nM=M+1\n")
            }
            Segment::Static => format!(
                "@{stem}.{index}\nD=M\n@SP\nA=M\nM=D\n@SP\nM=M+1\n",
                stem = self.current_file_stem,
            ),
        }
    }

    fn translate_pop(&self, segment: Segment, index: u16) -> String {
        match segment {
            Segment::Constant => unreachable!("constant segment is never a pop target"),
            Segment::Local | Segment::Argument | Segment::This | Segment::That => format!(
                "@{base}\nD=M\n@{index}\nD=A+D\n@R13\nM=D\n@SP\nAM=M-1\nD=M\n@R13\nA=M\nM=D\n",
                base = segment_symbol(segment),
            ),
            Segment::Pointer => {
                let reg = if index == 0 { "THIS" } else { "THAT" };
                format!("@SP\nAM=M-1\nD=M\n@{reg}\nM=D\n")
            }
            Segment::Temp => {
                let addr = 5 + index;
                format!("@SP\nAM=M-1\nD=M\n@{addr}\nM=D\n")
            }
            Segment::Static => format!(
                "@SP\nAM=M-1\nD=M\n@{stem}.{index}\nM=D\n",
                stem = self.current_file_stem,
            ),
        }
    }

    fn translate_arithmetic(&mut self, op: ArithmeticOp) -> String {
        match op {
            ArithmeticOp::Add => "@SP\nAM=M-1\nD=M\nA=A-1\nM=D+M\n".to_string(),
            ArithmeticOp::Sub => "@SP\nAM=M-1\nD=M\nA=A-1\nM=M-D\n".to_string(),
            ArithmeticOp::And => "@SP\nAM=M-1\nD=M\nA=A-1\nM=M&D\n".to_string(),
            ArithmeticOp::Or => "@SP\nAM=M-1\nD=M\nA=A-1\nM=M|D\n".to_string(),
            ArithmeticOp::Not => "@SP\nA=M-1\nM=!M\n".to_string(),
            ArithmeticOp::Neg => "@SP\nA=M-1\nM=-M\n".to_string(),
            ArithmeticOp::Eq | ArithmeticOp::Lt | ArithmeticOp::Gt => {
                let jump = match op {
                    ArithmeticOp::Eq => "JEQ",
                    ArithmeticOp::Lt => "JLT",
                    ArithmeticOp::Gt => "JGT",
                    _ => unreachable!(),
                };
                let label = self.compare_counter;
                self.compare_counter += 1;
                format!(
                    "@SP\nAM=M-1\nD=M\nA=A-1\nD=M-D\nM=-1\n@CONTINUE{label}\nD;{jump}\n@SP\nA=M-1\nM=0\n(CONTINUE{label})\n"
                )
            }
        }
    }

    fn scoped_label(&self, name: &str) -> String {
        match self.enclosing_function() {
            Some(function) => format!("{function}${name}"),
            None => name.to_string(),
        }
    }

    fn translate_label(&self, name: &str) -> String {
        format!("({})\n", self.scoped_label(name))
    }

    fn translate_goto(&self, name: &str) -> String {
        format!("@{}\n0;JMP\n", self.scoped_label(name))
    }

    fn translate_if_goto(&self, name: &str) -> String {
        format!("@SP\nAM=M-1\nD=M\n@{}\nD;JNE\n", self.scoped_label(name))
    }

    fn translate_function(&self, name: &str, num_locals: u16) -> String {
        let mut out = format!("({name})\n");
        for _ in 0..num_locals {
            out.push_str("@0\nD=A\n@SP\nA=M\nM=D\n@SP\nM=M+1\n");
        }
        out
    }

    fn translate_call(&mut self, name: &str, num_args: u16) -> String {
        let label = format!(
            "{}{}",
            self.enclosing_function().unwrap_or("Bootstrap"),
            self.call_counter
        );
        self.call_counter += 1;
        self.emit_call(name, num_args, &label)
    }

    fn translate_call_with_label(&mut self, name: &str, num_args: u16, label: &str) -> String {
        self.emit_call(name, num_args, label)
    }

    fn emit_call(&self, name: &str, num_args: u16, return_label: &str) -> String {
        let mut out = format!("@{return_label}\nD=A\n@SP\nAM=M+1\nA=A-1\nM=D\n");
        for reg in ["LCL", "ARG", "THIS", "THAT"] {
            out.push_str(&format!("@{reg}\nD=M\n@SP\nAM=M+1\nA=A-1\nM=D\n"));
        }
        out.push_str(&format!(
            "@SP\nD=M\n@{}\nD=D-A\n@ARG\nM=D\n@SP\nD=M\n@LCL\nM=D\n@{name}\n0;JMP\n({return_label})\n",
            num_args as u32 + 5,
        ));
        out
    }

    fn translate_return(&self) -> String {
        let mut out = String::new();
        out.push_str("@LCL\nD=M\n@FRAME\nM=D\n");
        out.push_str("@FRAME\nD=M\n@5\nA=D-A\nD=M\n@RET\nM=D\n");
        out.push_str("@SP\nAM=M-1\nD=M\n@ARG\nA=M\nM=D\n");
        out.push_str("@ARG\nD=M\n@SP\nM=D+1\n");
        out.push_str("@FRAME\nA=M-1\nD=M\n@THAT\nM=D\n");
        for (offset, register) in [("2", "THIS"), ("3", "ARG"), ("4", "LCL")] {
            out.push_str(&format!(
                "@FRAME\nD=M\n@{offset}\nA=D-A\nD=M\n@{register}\nM=D\n"
            ));
        }
        out.push_str("@RET\nA=M\n0;JMP\n");
        out
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn segment_symbol(segment: Segment) -> &'static str {
    match segment {
        Segment::Local => "LCL",
        Segment::Argument => "ARG",
        Segment::This => "THIS",
        Segment::That => "THAT",
        _ => unreachable!("only the four base segments have a fixed pointer symbol"),
    }
}
