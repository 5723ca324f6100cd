mod removes_generated_artifacts_contract;
